//! `/verify` - log a member verification to the prefilled spreadsheet.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse, ResolvedOption, ResolvedValue, User,
};

use crate::{
    error::{internal::InternalError, AppError},
    model::verification::{VerificationMethod, VerificationOutcome, VerifyUserParam},
    service::{sheets::SheetStore, verification::VerificationService},
};

pub const NAME: &str = "verify";

const NO_EMPTY_ROW_REPLY: &str = "❌ No empty row found in the sheet!";
const WRITE_FAILED_REPLY: &str = "❌ There was an error writing to the spreadsheet.";

pub fn register() -> CreateCommand {
    let method = VerificationMethod::ALL.iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "method", "Verification type")
            .required(true),
        |option, method| option.add_string_choice(method.as_str(), method.as_str()),
    );

    CreateCommand::new(NAME)
        .description("Log a user verification to the prefilled Google Sheet")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                "The Discord user to verify",
            )
            .required(true),
        )
        .add_option(method)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "socialuser",
                "Social media username (only if using a social account)",
            )
            .required(false),
        )
}

/// Runs the command.
///
/// The reply is deferred as ephemeral first since the sheet round trips can outlast
/// Discord's initial response window, then edited with the outcome. Sheet errors are logged
/// and reported to the invoking user with a generic message.
pub async fn run<S: SheetStore>(
    ctx: &Context,
    command: &CommandInteraction,
    service: &VerificationService<S>,
) -> Result<(), AppError> {
    command.defer_ephemeral(&ctx.http).await?;

    let parsed = parse_options(&command.data.options());

    let content = match parsed {
        Ok((param, tag)) => match service.record(param).await {
            Ok(outcome) => outcome_reply(&tag, outcome),
            Err(e) => {
                tracing::error!("Failed to record verification for {}: {}", tag, e);
                WRITE_FAILED_REPLY.to_string()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read verify options: {}", e);
            WRITE_FAILED_REPLY.to_string()
        }
    };

    command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;

    Ok(())
}

/// Pulls the target user, method and optional social handle out of the resolved options.
///
/// Returns the record parameters together with the user's tag for the reply.
fn parse_options(options: &[ResolvedOption<'_>]) -> Result<(VerifyUserParam, String), AppError> {
    let mut user = None;
    let mut method = None;
    let mut social_username = None;

    for option in options {
        match (option.name, &option.value) {
            ("user", ResolvedValue::User(value, _)) => user = Some(*value),
            ("method", ResolvedValue::String(value)) => method = Some(*value),
            ("socialuser", ResolvedValue::String(value)) => social_username = Some(*value),
            _ => {}
        }
    }

    let user = user.ok_or_else(|| invalid_option("user"))?;
    let method = method.ok_or_else(|| invalid_option("method"))?;

    Ok((build_param(user, method, social_username)?, user.tag()))
}

fn build_param(
    user: &User,
    method: &str,
    social_username: Option<&str>,
) -> Result<VerifyUserParam, AppError> {
    let method = method
        .parse::<VerificationMethod>()
        .map_err(|_| invalid_option("method"))?;

    Ok(VerifyUserParam {
        method,
        social_username: social_username
            .filter(|value| !value.is_empty())
            .map(str::to_string),
        discord_username: user.name.clone(),
        discord_id: user.id.get(),
    })
}

fn invalid_option(name: &str) -> AppError {
    InternalError::InvalidCommandOption {
        command: NAME.to_string(),
        name: name.to_string(),
    }
    .into()
}

fn outcome_reply(tag: &str, outcome: VerificationOutcome) -> String {
    match outcome {
        VerificationOutcome::Recorded { row } => {
            format!("✅ Added verification for **{}** to row {} in the sheet", tag, row)
        }
        VerificationOutcome::NoEmptyRow => NO_EMPTY_ROW_REPLY.to_string(),
    }
}
