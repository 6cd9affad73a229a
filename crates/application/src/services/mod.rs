mod command;
mod command_resolver;

pub use command::{Command, ResolvedAddressSet, DEFAULT_SHORT_TTL, DEFAULT_TTL};
pub use command_resolver::CommandResolver;
