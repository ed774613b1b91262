use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use configs::AppConfig;
use service::api::{HttpApiClient, PortalApi};
use service::auth::AuthService;
use service::employees::EmployeeService;
use service::session::SessionStore;
use service::storage::JsonMapStore;
use service::ServiceError;
use tracing::{error, info};

use crate::cli::{Cli, Command};
use crate::commands;
use crate::errors::CommandError;
use crate::render;

/// The flows a command can reach, sharing one API client and one session.
pub struct Portal<A: PortalApi> {
    pub auth: AuthService<A>,
    pub employees: EmployeeService<A>,
}

impl<A: PortalApi> Portal<A> {
    pub fn new(api: Arc<A>, session: Arc<SessionStore>) -> Self {
        Self {
            auth: AuthService::new(Arc::clone(&api), Arc::clone(&session)),
            employees: EmployeeService::new(api, session),
        }
    }
}

impl Portal<HttpApiClient> {
    /// HTTP client against `api.base_url`, session persisted at `session.path`.
    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        let kv = Arc::new(JsonMapStore::<String, String>::open(&cfg.session.path)?);
        let session = Arc::new(SessionStore::with_system_clock(kv));
        let api = Arc::new(HttpApiClient::from_config(&cfg.api)?);
        info!(base_url = %api.base_url(), session_path = %cfg.session.path.display(), "portal initialised");
        Ok(Self::new(api, session))
    }
}

/// Public entry: run the parsed command against the configured backend.
pub async fn run(cli: Cli, cfg: AppConfig) -> ExitCode {
    let portal = match Portal::from_config(&cfg) {
        Ok(p) => p,
        Err(e) => {
            error!(error = %e, "startup failed");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    run_command(&portal, cli.command, &mut std::io::stdout(), &mut std::io::stderr()).await
}

/// Execute `command`, printing results to `out` and failures to `err`.
pub async fn run_command<A, O, E>(portal: &Portal<A>, command: Command, out: &mut O, err: &mut E) -> ExitCode
where
    A: PortalApi,
    O: Write,
    E: Write,
{
    match commands::execute(portal, command, out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Err(io) = report(&e, err) {
                error!(error = %e, write_error = %io, "could not print command failure");
            }
            ExitCode::FAILURE
        }
    }
}

/// Print a failed command for the user: field errors one per line, anything
/// else as a single message.
pub fn report<W: Write>(err: &CommandError, out: &mut W) -> std::io::Result<()> {
    let text = match err {
        CommandError::Service(ServiceError::Validation(fields)) => render::field_errors(fields),
        other => format!("error: {other}\n"),
    };
    out.write_all(text.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::EmployeesCommand;
    use service::api::mock::MockPortalApi;
    use service::session::FixedClock;
    use service::storage::MemoryStore;
    use service::validation::{Field, FieldError, Rule, ValidationErrors};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn mock_portal() -> Portal<MockPortalApi> {
        let session = SessionStore::new(Arc::new(MemoryStore::new()), Arc::new(FixedClock::new(1_767_225_600)));
        Portal::new(Arc::new(MockPortalApi::new()), Arc::new(session))
    }

    #[test]
    fn report_formats_field_and_general_errors() -> std::io::Result<()> {
        let mut fields = ValidationErrors::new();
        fields.add(Field::Email, FieldError::new(Rule::Format, "Email is not valid"));
        let mut out = Vec::new();
        report(&CommandError::Service(ServiceError::Validation(fields)), &mut out)?;
        assert_eq!(String::from_utf8(out).unwrap(), "email: Email is not valid\n");

        let mut out = Vec::new();
        report(&CommandError::Service(ServiceError::Api { status: 401, message: "Invalid credentials".into() }), &mut out)?;
        assert_eq!(String::from_utf8(out).unwrap(), "error: Invalid credentials\n");
        Ok(())
    }

    #[test]
    fn report_surfaces_write_failures() {
        let err = report(&CommandError::Service(ServiceError::SessionExpired), &mut BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }

    #[tokio::test]
    async fn failed_command_exits_with_failure() {
        let portal = mock_portal();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run_command(&portal, Command::Employees(EmployeesCommand::List), &mut out, &mut err).await;
        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), format!("error: {}\n", ServiceError::SessionExpired));

        // an unwritable error stream still yields a failure code
        let code = run_command(&portal, Command::Employees(EmployeesCommand::List), &mut out, &mut BrokenPipe).await;
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn successful_command_exits_with_success() {
        let portal = mock_portal();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run_command(&portal, Command::Status, &mut out, &mut err).await;
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(String::from_utf8(out).unwrap(), "Not signed in\n");
        assert!(err.is_empty());
    }

    #[test]
    fn from_config_creates_session_file() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("portal_cfg_{}", uuid::Uuid::new_v4()));
        let mut cfg = AppConfig::default();
        cfg.session.path = dir.join("state").join("session.json");
        cfg.normalize_and_validate()?;

        let portal = Portal::from_config(&cfg)?;
        assert!(cfg.session.path.exists());
        assert!(!portal.auth.is_authenticated());

        let _ = std::fs::remove_dir_all(&dir);
        Ok(())
    }
}
