//! Who a command is about.

use crate::commands::CommandError;
use crate::database::Database;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// An explicit osu! username.
    Username(String),
    /// A chat mention such as `<@123>` or `<@!123>`.
    Mention(u64),
    /// Nothing given: the caller themselves.
    Caller,
}

impl Target {
    /// Mentions with no usable digits fall back to being read as a username.
    pub fn parse(arg: Option<&str>) -> Self {
        let Some(arg) = arg.map(str::trim).filter(|a| !a.is_empty()) else {
            return Target::Caller;
        };

        if arg.starts_with("<@") && arg.ends_with('>') {
            let digits: String = arg.chars().filter(char::is_ascii_digit).collect();
            if let Ok(id) = digits.parse() {
                return Target::Mention(id);
            }
        }

        Target::Username(arg.to_string())
    }
}

/// Resolves `target` to an osu! username, looking up links as needed.
pub async fn resolve_target(
    db: &Database,
    caller: u64,
    target: &Target,
) -> Result<String, CommandError> {
    match target {
        Target::Username(name) => Ok(name.clone()),
        Target::Mention(id) => db
            .lookup(*id)
            .await?
            .ok_or(CommandError::NotLinked { own: *id == caller }),
        Target::Caller => db
            .lookup(caller)
            .await?
            .ok_or(CommandError::NotLinked { own: true }),
    }
}
