use super::Command;

/// Splits a trailing directive label off a zone-stripped query name.
pub struct CommandResolver;

impl CommandResolver {
    /// Returns the address-bearing portion and the command to apply to it.
    ///
    /// Unrecognized trailing labels stay in the address portion and the
    /// command is `Noop`. `ECHO`/`REFLECT` only count when they are the whole
    /// remainder.
    pub fn resolve(remainder: &str) -> (&str, Command) {
        let (head, label) = match remainder.rfind('.') {
            Some(dot) => (&remainder[..dot], &remainder[dot + 1..]),
            None => ("", remainder),
        };

        match Command::parse(label) {
            Some(Command::Echo) if !head.is_empty() => (remainder, Command::Noop),
            Some(command) => (head, command),
            None => (remainder, Command::Noop),
        }
    }
}
