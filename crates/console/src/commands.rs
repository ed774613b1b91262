use std::io::Write;

use models::{CreateEmployeeRequest, Credentials};
use service::api::PortalApi;
use tracing::info;

use crate::cli::{Command, EmployeesCommand};
use crate::errors::CommandError;
use crate::render;
use crate::startup::Portal;

/// Run one subcommand, writing its result to `out`.
pub async fn execute<A: PortalApi, W: Write>(
    portal: &Portal<A>,
    command: Command,
    out: &mut W,
) -> Result<(), CommandError> {
    match command {
        Command::Login(args) => {
            if portal.auth.is_authenticated() {
                let who = portal.auth.current_session().map(|s| s.user_id).unwrap_or_default();
                info!(user_id = %who, "already authenticated; skipping login");
                if who.is_empty() {
                    writeln!(out, "Already signed in")?;
                } else {
                    writeln!(out, "Already signed in as {who}")?;
                }
                return Ok(());
            }
            let session = portal.auth.login(&Credentials::new(args.email, args.password)).await?;
            writeln!(out, "Signed in as {}", session.user_id)?;
        }
        Command::Logout => {
            portal.auth.logout()?;
            writeln!(out, "Signed out")?;
        }
        Command::Status => {
            let session = portal.auth.current_session();
            out.write_all(render::session_status(session.as_ref()).as_bytes())?;
        }
        Command::Employees(EmployeesCommand::List) => {
            let employees = portal.employees.list().await?;
            out.write_all(render::employee_table(&employees).as_bytes())?;
        }
        Command::Employees(EmployeesCommand::Create(args)) => {
            let request = CreateEmployeeRequest::new(args.name, args.email, args.password);
            let created = portal.employees.create(&request).await?;
            writeln!(out, "Created employee {} <{}> (id {})", created.name, created.email, created.id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cli::{CreateArgs, LoginArgs};
    use models::{Employee, LoginResponse};
    use service::api::mock::MockPortalApi;
    use service::session::{FixedClock, SessionStore};
    use service::storage::{KeyValueStore, MemoryStore};
    use service::ServiceError;

    const NOW: i64 = 1_767_225_600;

    fn portal() -> (Portal<MockPortalApi>, Arc<MockPortalApi>) {
        let api = Arc::new(
            MockPortalApi::new()
                .with_user("admin@acme.io", "Passw0rd!", LoginResponse { token: "tok".into(), user_id: "u-7".into(), expires_at: NOW + 600 })
                .with_employees(vec![Employee {
                    id: "1".into(),
                    name: "Ana".into(),
                    email: "ana@acme.io".into(),
                    created_at: "2026-03-05T10:15:30Z".into(),
                }]),
        );
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStore::new()), Arc::new(FixedClock::new(NOW))));
        (Portal::new(api.clone(), session), api)
    }

    fn login(email: &str, password: &str) -> Command {
        Command::Login(LoginArgs { email: email.into(), password: password.into() })
    }

    async fn run(p: &Portal<MockPortalApi>, c: Command) -> Result<String, CommandError> {
        let mut out = Vec::new();
        execute(p, c, &mut out).await?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[tokio::test]
    async fn login_status_list_logout() -> Result<(), CommandError> {
        let (p, api) = portal();
        assert_eq!(run(&p, Command::Status).await?, "Not signed in\n");
        assert_eq!(run(&p, login("admin@acme.io", "Passw0rd!")).await?, "Signed in as u-7\n");
        assert!(run(&p, Command::Status).await?.starts_with("Signed in as u-7"));

        // second login is a no-op
        assert_eq!(run(&p, login("admin@acme.io", "Passw0rd!")).await?, "Already signed in as u-7\n");
        assert_eq!(api.calls(), 1);

        let table = run(&p, Command::Employees(EmployeesCommand::List)).await?;
        assert!(table.contains("ana@acme.io"));
        assert!(table.contains("March 5, 2026"));

        assert_eq!(run(&p, Command::Logout).await?, "Signed out\n");
        assert_eq!(run(&p, Command::Status).await?, "Not signed in\n");
        Ok(())
    }

    #[tokio::test]
    async fn employees_require_session() {
        let (p, _) = portal();
        let err = run(&p, Command::Employees(EmployeesCommand::List)).await.unwrap_err();
        assert!(matches!(err, CommandError::Service(ServiceError::SessionExpired)));
    }

    #[tokio::test]
    async fn create_reports_field_errors() -> Result<(), CommandError> {
        let (p, _) = portal();
        run(&p, login("admin@acme.io", "Passw0rd!")).await?;
        let cmd = Command::Employees(EmployeesCommand::Create(CreateArgs {
            name: " ".into(),
            email: "eva@acme.io".into(),
            password: "Abc12345".into(),
        }));
        let err = run(&p, cmd).await.unwrap_err();
        let CommandError::Service(ServiceError::Validation(fields)) = err else { panic!("expected field errors") };
        assert_eq!(
            render::field_errors(&fields),
            "name: Name is required\npassword: Password must contain at least one special character\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_prints_new_employee() -> Result<(), CommandError> {
        let (p, _) = portal();
        run(&p, login("admin@acme.io", "Passw0rd!")).await?;
        let cmd = Command::Employees(EmployeesCommand::Create(CreateArgs {
            name: "Eva".into(),
            email: "eva@acme.io".into(),
            password: "Abc1234!".into(),
        }));
        assert_eq!(run(&p, cmd).await?, "Created employee Eva <eva@acme.io> (id emp-2)\n");
        Ok(())
    }

    #[tokio::test]
    async fn stored_token_without_user_id_counts_as_signed_in() -> Result<(), CommandError> {
        let api = Arc::new(MockPortalApi::new().with_user(
            "admin@acme.io",
            "Passw0rd!",
            LoginResponse { token: "tok".into(), user_id: "u-7".into(), expires_at: NOW + 600 },
        ));
        let kv = Arc::new(MemoryStore::new());
        kv.set_many(&[("auth_token", "tok".into()), ("expires_at", (NOW + 600).to_string())])?;
        let session = Arc::new(SessionStore::new(kv, Arc::new(FixedClock::new(NOW))));
        let p = Portal::new(api.clone(), session);

        assert!(p.auth.is_authenticated());
        assert!(run(&p, Command::Status).await?.starts_with("Signed in"));
        assert_eq!(run(&p, login("admin@acme.io", "Passw0rd!")).await?, "Already signed in\n");
        assert_eq!(api.calls(), 0);
        Ok(())
    }
}
