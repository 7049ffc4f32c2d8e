//! Prefix command dispatch.
//!
//! Commands live in an explicit table built by [`Dispatcher::new`]. Each entry is either a
//! handler function or a group of subcommands (`task add`, `task list`, ...). Handlers are
//! plain synchronous functions that take the shared state, the invocation and the raw argument
//! text, and answer with the replies to send. Sending is left to the message event handler, so
//! nothing here ever awaits.
//!
//! `help` is built into the dispatcher because it renders the table itself.

pub mod dance;
pub mod hello;
pub mod say;
pub mod sp;
pub mod task;

#[cfg(test)]
mod test;

use crate::{
    error::command::CommandError,
    model::{invocation::Invocation, reply::Reply},
    state::AppState,
    util::{format::code_block, parse::split_first_word},
};

/// Marks a message as a command invocation.
pub const PREFIX: char = '!';

const HELP_NAME: &str = "help";
const HELP_DESCRIPTION: &str = "Shows this message";

/// Signature shared by every command handler.
///
/// # Arguments
/// - `state` - Shared application state
/// - `invocation` - The message that invoked the command
/// - `args` - Argument text after the command (and subcommand) name, trimmed
pub type HandlerFn = fn(&AppState, &Invocation, &str) -> Result<Vec<Reply>, CommandError>;

pub struct Command {
    pub name: &'static str,
    /// One-line description shown by `help`.
    pub help: &'static str,
    /// Argument placeholders shown after the name, e.g. `<task_index>`.
    pub usage: &'static str,
    pub kind: CommandKind,
}

pub enum CommandKind {
    Handler(HandlerFn),
    /// Subcommands selected by the first argument word.
    Group(Vec<Command>),
}

impl Command {
    pub fn handler(
        name: &'static str,
        help: &'static str,
        usage: &'static str,
        handler: HandlerFn,
    ) -> Self {
        Self {
            name,
            help,
            usage,
            kind: CommandKind::Handler(handler),
        }
    }

    pub fn group(name: &'static str, help: &'static str, subcommands: Vec<Command>) -> Self {
        Self {
            name,
            help,
            usage: "",
            kind: CommandKind::Group(subcommands),
        }
    }

    fn find_subcommand(&self, name: &str) -> Option<&Command> {
        match &self.kind {
            CommandKind::Group(subcommands) => subcommands.iter().find(|sub| sub.name == name),
            CommandKind::Handler(_) => None,
        }
    }
}

/// Routes command invocations to their handlers.
pub struct Dispatcher {
    commands: Vec<Command>,
}

impl Dispatcher {
    /// Builds the dispatcher with every bot command registered.
    pub fn new() -> Self {
        Self::with_commands(vec![
            hello::command(),
            task::command(),
            say::command(),
            dance::command(),
            sp::command(),
        ])
    }

    pub fn with_commands(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Runs the command in `invocation`, if it is one.
    ///
    /// A message is a command when it starts with [`PREFIX`] immediately followed by a
    /// non-whitespace character. Messages from bots are never commands.
    ///
    /// # Returns
    /// - `None` - Not a command; nothing to do
    /// - `Some(Ok(replies))` - Replies to send to the invoking channel, in order
    /// - `Some(Err(CommandError))` - The command failed and the error should be reported
    pub fn dispatch(
        &self,
        state: &AppState,
        invocation: &Invocation,
    ) -> Option<Result<Vec<Reply>, CommandError>> {
        if invocation.author_is_bot {
            return None;
        }

        let body = invocation.content.strip_prefix(PREFIX)?;
        if body.chars().next().map_or(true, char::is_whitespace) {
            return None;
        }

        let (name, args) = split_first_word(body);
        tracing::debug!("Dispatching command {:?} with args {:?}", name, args);

        if name == HELP_NAME {
            return Some(self.help(args).map(|text| vec![Reply::text(code_block(&text))]));
        }

        let Some(command) = self.find(name) else {
            return Some(Err(CommandError::CommandNotFound(name.to_string())));
        };

        Some(match &command.kind {
            CommandKind::Handler(handler) => handler(state, invocation, args),
            CommandKind::Group(_) => {
                let (sub_name, sub_args) = split_first_word(args);
                match command.find_subcommand(sub_name) {
                    Some(Command {
                        kind: CommandKind::Handler(handler),
                        ..
                    }) => handler(state, invocation, sub_args),
                    _ => Ok(vec![Reply::text(code_block(&self.command_help(command, &[])))]),
                }
            }
        })
    }

    fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// Help text for the whole bot, a command, or a subcommand path such as `task remove`.
    ///
    /// # Returns
    /// - `Ok(String)` - Help text, not yet wrapped in a code block
    /// - `Err(CommandError::CommandNotFound)` - The first word names no command
    pub fn help(&self, args: &str) -> Result<String, CommandError> {
        let mut words = args.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(self.overview());
        };

        if name == HELP_NAME {
            return Ok(format!(
                "{}{} [command]\n\n{}\n\n{}",
                PREFIX,
                HELP_NAME,
                HELP_DESCRIPTION,
                footer()
            ));
        }

        let command = self
            .find(name)
            .ok_or_else(|| CommandError::CommandNotFound(name.to_string()))?;

        // Descend into subcommands as far as the words keep matching.
        let mut path = Vec::new();
        let mut current = command;
        for word in words {
            match current.find_subcommand(word) {
                Some(sub) => {
                    path.push(current.name);
                    current = sub;
                }
                None => break,
            }
        }

        Ok(self.command_help(current, &path))
    }

    fn overview(&self) -> String {
        let mut entries: Vec<(&str, &str)> = self
            .commands
            .iter()
            .map(|command| (command.name, command.help))
            .chain(std::iter::once((HELP_NAME, HELP_DESCRIPTION)))
            .collect();
        entries.sort_by_key(|(name, _)| *name);

        format!("Commands:\n{}\n\n{}", listing(&entries), footer())
    }

    fn command_help(&self, command: &Command, parents: &[&str]) -> String {
        let mut signature = String::from(PREFIX);
        for parent in parents {
            signature.push_str(parent);
            signature.push(' ');
        }
        signature.push_str(command.name);
        if !command.usage.is_empty() {
            signature.push(' ');
            signature.push_str(command.usage);
        }

        let mut text = format!("{}\n\n{}", signature, command.help);
        if let CommandKind::Group(subcommands) = &command.kind {
            let mut entries: Vec<(&str, &str)> =
                subcommands.iter().map(|sub| (sub.name, sub.help)).collect();
            entries.sort_by_key(|(name, _)| *name);
            text.push_str(&format!("\n\nCommands:\n{}", listing(&entries)));
        }
        text.push_str(&format!("\n\n{}", footer()));
        text
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-column listing with names padded to a common width.
fn listing(entries: &[(&str, &str)]) -> String {
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|(name, help)| format!("  {:<width$} {}", name, help, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn footer() -> String {
    format!("Type {}{} command for more info on a command.", PREFIX, HELP_NAME)
}
