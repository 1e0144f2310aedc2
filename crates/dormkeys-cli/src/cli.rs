//! Command-line and shell grammar.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Track dormitory rooms, keys, and lost-key fines.
#[derive(Debug, Parser)]
#[command(name = "dormkeys", version)]
pub struct Cli {
    /// Snapshot file the dormitory is loaded from and saved to.
    #[arg(
        long,
        env = "DORMKEYS_DATA",
        default_value = "dorm_data.json",
        global = true
    )]
    pub data: PathBuf,

    /// Log rejected operations and storage activity to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(flatten)]
    Op(Operation),

    /// Read commands line by line against one session.
    Shell,
}

/// Everything the front desk can do, shared by the one-shot
/// subcommands and the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Operation {
    /// Register a room, replacing any room with the same number.
    AddRoom {
        room: String,
        /// Unassigned room keys the room starts with.
        #[arg(short, long, allow_negative_numbers = true)]
        keys: Option<i64>,
    },

    /// Check a resident in, issuing one room key.
    CheckIn { room: String, resident: String },

    /// Check a resident out, taking one room key back.
    CheckOut { room: String, resident: String },

    /// Report a lost key: `room_key` or `entrance_key`.
    LoseKey {
        room: String,
        resident: String,
        key_type: String,
    },

    /// List rooms with fewer keys than the target supply.
    Inventory,

    /// List residents who owe lost-key fines.
    Fines {
        /// Include residents who owe nothing.
        #[arg(long)]
        all: bool,
    },

    /// List every room and its residents.
    Roster,

    /// Write the dormitory to the data file.
    Save,

    /// Discard unsaved state and read the data file again.
    Load,
}

/// One line typed into the shell.
#[derive(Debug, Parser)]
#[command(name = "dormkeys", no_binary_name = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub op: Operation,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
        ShellLine::command().debug_assert();
    }

    #[test]
    fn test_parse_add_room_with_keys() {
        let cli = Cli::try_parse_from(["dormkeys", "add-room", "101", "--keys", "6"]).unwrap();
        assert_eq!(
            cli.command_op(),
            Some(&Operation::AddRoom {
                room: "101".into(),
                keys: Some(6),
            })
        );
    }

    #[test]
    fn test_parse_negative_key_count() {
        let cli = Cli::try_parse_from(["dormkeys", "add-room", "101", "-k", "-1"]).unwrap();
        assert_eq!(
            cli.command_op(),
            Some(&Operation::AddRoom {
                room: "101".into(),
                keys: Some(-1),
            })
        );
    }

    #[test]
    fn test_parse_rejects_non_integer_keys() {
        assert!(Cli::try_parse_from(["dormkeys", "add-room", "101", "--keys", "four"]).is_err());
    }

    #[test]
    fn test_data_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["dormkeys", "roster", "--data", "/tmp/d.json"]).unwrap();
        assert_eq!(cli.data, PathBuf::from("/tmp/d.json"));
    }

    #[test]
    fn test_parse_shell_line() {
        let line = ShellLine::try_parse_from(["lose-key", "101", "alice", "room_key"]).unwrap();
        assert_eq!(
            line.op,
            Operation::LoseKey {
                room: "101".into(),
                resident: "alice".into(),
                key_type: "room_key".into(),
            }
        );
    }

    impl Cli {
        fn command_op(&self) -> Option<&Operation> {
            match &self.command {
                Command::Op(op) => Some(op),
                Command::Shell => None,
            }
        }
    }
}
