use std::fmt;

/// Exit status for a missing, unknown or help subcommand.
pub const USAGE_EXIT_CODE: i32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinterCommand {
    IssueCollectionToken,
    SetRoles,
    Create,
}

impl MinterCommand {
    pub const ALL: [MinterCommand; 3] = [
        MinterCommand::IssueCollectionToken,
        MinterCommand::SetRoles,
        MinterCommand::Create,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MinterCommand::IssueCollectionToken => "issue-collection-token",
            MinterCommand::SetRoles => "set-roles",
            MinterCommand::Create => "create",
        }
    }
}

impl fmt::Display for MinterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    Help,
    /// `None` when no subcommand was given at all.
    Unknown(Option<String>),
}

impl UsageError {
    pub fn exit_code(&self) -> i32 {
        USAGE_EXIT_CODE
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = match self {
            UsageError::Help => "Available commands:",
            UsageError::Unknown(_) => "Please provide a proper command. Available commands:",
        };
        let rule = "=".repeat(header.len());
        writeln!(f, "{}\n{}\n{}", rule, header, rule)?;
        let commands: Vec<&str> = MinterCommand::ALL.iter().map(MinterCommand::as_str).collect();
        write!(f, "{}", commands.join("\n"))
    }
}

impl std::error::Error for UsageError {}

pub fn dispatch(subcommand: Option<&str>) -> Result<MinterCommand, UsageError> {
    match subcommand {
        Some("-h") | Some("--help") => Err(UsageError::Help),
        Some(token) => MinterCommand::ALL
            .into_iter()
            .find(|command| command.as_str() == token)
            .ok_or_else(|| UsageError::Unknown(Some(token.to_string()))),
        None => Err(UsageError::Unknown(None)),
    }
}
