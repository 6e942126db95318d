use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_SERVICE_ACCOUNT_FILE: &str = "service_account.json";
const DEFAULT_STAFF_ROLES: &str = "Admins,Moderator,Community Management";
const DEFAULT_TICKET_PREFIX: &str = "ticket-";

pub struct Config {
    pub discord_token: String,
    /// Application the `verify` command is registered under.
    pub discord_client_id: u64,

    pub sheet_id: String,
    pub service_account_file: PathBuf,

    /// Category whose child channels are treated as tickets.
    pub ticket_category_id: u64,
    pub ticket_prefix: String,
    /// Role name fragments that mark a member as staff.
    pub staff_roles: Vec<String>,

    /// Persist tracked tickets to this database when set; otherwise they live in memory.
    pub database_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank optional variables are treated as unset.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            discord_client_id: parse_id("CLIENT_ID", required("CLIENT_ID")?)?,
            sheet_id: required("SHEET_ID")?,
            service_account_file: optional("GOOGLE_SERVICE_ACCOUNT_FILE")
                .unwrap_or_else(|| DEFAULT_SERVICE_ACCOUNT_FILE.to_string())
                .into(),
            ticket_category_id: parse_id("CATEGORY_ID", required("CATEGORY_ID")?)?,
            ticket_prefix: optional("TICKET_PREFIX")
                .unwrap_or_else(|| DEFAULT_TICKET_PREFIX.to_string()),
            staff_roles: parse_list(
                &optional("STAFF_ROLES").unwrap_or_else(|| DEFAULT_STAFF_ROLES.to_string()),
            ),
            database_url: optional("DATABASE_URL"),
        })
    }
}

fn parse_id(name: &str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("DISCORD_TOKEN", "token"),
        ("CLIENT_ID", "1111"),
        ("SHEET_ID", "sheet"),
        ("CATEGORY_ID", "2222"),
    ];

    /// Tests loading configuration with only the required variables.
    ///
    /// Expected: Ok with documented defaults for every optional setting
    #[test]
    fn applies_defaults_for_optional_variables() {
        let config = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();

        assert_eq!(config.discord_client_id, 1111);
        assert_eq!(config.ticket_category_id, 2222);
        assert_eq!(config.ticket_prefix, "ticket-");
        assert_eq!(
            config.service_account_file,
            PathBuf::from("service_account.json")
        );
        assert_eq!(
            config.staff_roles,
            vec!["Admins", "Moderator", "Community Management"]
        );
        assert!(config.database_url.is_none());
    }

    /// Tests that a missing required variable is reported by name.
    ///
    /// Expected: Err(MissingEnvVar("SHEET_ID"))
    #[test]
    fn reports_missing_variable_by_name() {
        let vars: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != "SHEET_ID")
            .collect();

        let result = Config::from_lookup(lookup_from(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "SHEET_ID"
        ));
    }

    /// Tests that a non-numeric category ID is rejected.
    ///
    /// Expected: Err(InvalidEnvVar) naming CATEGORY_ID
    #[test]
    fn rejects_non_numeric_category() {
        let mut vars = REQUIRED.to_vec();
        vars.retain(|(k, _)| *k != "CATEGORY_ID");
        vars.push(("CATEGORY_ID", "tickets"));

        let result = Config::from_lookup(lookup_from(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { name, .. })) if name == "CATEGORY_ID"
        ));
    }

    /// Tests parsing of a custom staff role list and database URL.
    ///
    /// Expected: Ok with trimmed, non-empty role names
    #[test]
    fn parses_staff_roles_and_database_url() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("STAFF_ROLES", " Helpers , ,Mods "));
        vars.push(("DATABASE_URL", "sqlite://tickets.db?mode=rwc"));

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.staff_roles, vec!["Helpers", "Mods"]);
        assert_eq!(
            config.database_url.as_deref(),
            Some("sqlite://tickets.db?mode=rwc")
        );
    }
}
