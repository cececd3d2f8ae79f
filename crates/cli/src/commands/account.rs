//! Login, registration and session commands.

use std::io;

use clap::Args;
use storefront_app::{
    auth::{AuthService, Credentials},
    domain::profiles::models::{Address, Registration},
    session::UserType,
};

use crate::{commands::CommandError, prompt, render};

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password; asked for when omitted
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    /// Account type (customer, seller, owner)
    #[arg(long, default_value_t = UserType::Customer)]
    role: UserType,

    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    /// Account password; asked for when omitted
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Date of birth, e.g. 1990-04-01
    #[arg(long)]
    date_of_birth: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    street: Option<String>,

    #[arg(long)]
    postal_code: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    province: Option<String>,

    #[arg(long)]
    country: Option<String>,
}

impl RegisterArgs {
    fn address(&self) -> Option<Address> {
        let address = Address {
            street: self.street.clone(),
            postal_code: self.postal_code.clone(),
            city: self.city.clone(),
            province: self.province.clone(),
            country: self.country.clone(),
        };

        (address != Address::default()).then_some(address)
    }
}

fn password(given: Option<String>) -> Result<String, CommandError> {
    match given {
        Some(password) => Ok(password),
        None => prompt::read_line("Password: ").map_err(CommandError::Input),
    }
}

pub(crate) async fn login(
    auth: &AuthService,
    args: LoginArgs,
    out: &mut dyn io::Write,
) -> Result<(), CommandError> {
    let password = password(args.password)?;

    let identity = auth.login(Credentials::new(args.email, password)).await?;

    writeln!(out, "Logged in as {} ({})", identity.display_name, identity.user_type)?;

    Ok(())
}

pub(crate) async fn register(
    auth: &AuthService,
    args: RegisterArgs,
    out: &mut dyn io::Write,
) -> Result<(), CommandError> {
    let address = args.address();
    let password = password(args.password)?;

    let identity = auth
        .register(Registration {
            first_name: args.first_name,
            last_name: args.last_name,
            date_of_birth: args.date_of_birth,
            phone_number: args.phone,
            address,
            email: args.email,
            password,
            user_type: args.role,
        })
        .await?;

    writeln!(
        out,
        "Registered and logged in as {} ({})",
        identity.display_name, identity.user_type
    )?;

    Ok(())
}

pub(crate) fn logout(auth: &AuthService, out: &mut dyn io::Write) -> Result<(), CommandError> {
    auth.logout()?;

    writeln!(out, "Logged out")?;

    Ok(())
}

pub(crate) fn whoami(auth: &AuthService, out: &mut dyn io::Write) -> Result<(), CommandError> {
    let identity = auth.current()?;

    render::write_identity(out, identity.as_ref())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use storefront_app::{
        api::{MockAuthApi, MockProfilesApi},
        auth::LoginResponse,
        domain::profiles::models::PersonId,
        session::{MemorySessionStore, SessionToken},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn login_then_whoami_then_logout() -> TestResult {
        let mut api = MockAuthApi::new();

        api.expect_login()
            .once()
            .withf(|credentials| credentials.email == "ada@example.com")
            .return_once(|_| {
                Ok(LoginResponse {
                    token: SessionToken::new("jwt"),
                    user_type: UserType::Customer,
                    user_id: PersonId::new(5),
                    email: "ada@example.com".to_string(),
                    first_name: Some("Ada".to_string()),
                    last_name: Some("Buyer".to_string()),
                })
            });

        let auth = AuthService::new(
            Arc::new(api),
            Arc::new(MockProfilesApi::new()),
            Arc::new(MemorySessionStore::new()),
        );
        let mut out = Vec::new();

        login(
            &auth,
            LoginArgs {
                email: "ada@example.com".to_string(),
                password: Some("secret".to_string()),
            },
            &mut out,
        )
        .await?;
        whoami(&auth, &mut out)?;
        logout(&auth, &mut out)?;
        whoami(&auth, &mut out)?;

        assert_eq!(
            String::from_utf8(out)?,
            "Logged in as Ada Buyer (customer)\n\
             Ada Buyer <ada@example.com> (customer #5)\n\
             Logged out\n\
             Not logged in\n"
        );

        Ok(())
    }
}
