use crate::game::*;

/// Table for player profiles.
#[rustfmt::skip]
pub const USERS:        &str = "users";
/// Table for the daily community boards.
#[rustfmt::skip]
pub const BOARDS:       &str = "boards";
/// Table for per-user, per-day hole cards and tarots.
#[rustfmt::skip]
pub const USERS_BOARDS: &str = "users_boards";
/// Single-row table holding the game state.
#[rustfmt::skip]
pub const GAME:         &str = "game";

/// Schema metadata for PostgreSQL tables.
///
/// Pure DDL description with no I/O; all strings are built at compile
/// time with [`const_format::concatcp!`] from the table-name constants.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements, possibly empty.
    fn indices() -> &'static str;
}

/// Every table, in creation order.
pub fn migrations() -> [&'static str; 8] {
    [
        User::creates(),
        User::indices(),
        Board::creates(),
        Board::indices(),
        UserBoard::creates(),
        UserBoard::indices(),
        GameState::creates(),
        GameState::indices(),
    ]
}

impl Schema for User {
    fn name() -> &'static str {
        USERS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            USERS,
            " (
                uid         TEXT PRIMARY KEY,
                balance     INT  NOT NULL DEFAULT 0
            );"
        )
    }
    fn indices() -> &'static str {
        ""
    }
}

impl Schema for Board {
    fn name() -> &'static str {
        BOARDS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            BOARDS,
            " (
                day         INT  PRIMARY KEY,
                flop1       TEXT NOT NULL,
                flop2       TEXT NOT NULL,
                flop3       TEXT NOT NULL,
                turn        TEXT NOT NULL,
                river       TEXT NOT NULL
            );"
        )
    }
    fn indices() -> &'static str {
        ""
    }
}

impl Schema for UserBoard {
    fn name() -> &'static str {
        USERS_BOARDS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            USERS_BOARDS,
            " (
                uid         TEXT NOT NULL,
                day         INT  NOT NULL,
                hole1       TEXT NOT NULL,
                hole2       TEXT NOT NULL,
                tarot1      TEXT,
                tarot2      TEXT,
                tarot3      TEXT,
                PRIMARY KEY (uid, day)
            );"
        )
    }
    fn indices() -> &'static str {
        const_format::concatcp!(
            "CREATE INDEX IF NOT EXISTS idx_users_boards_day ON ",
            USERS_BOARDS,
            " (day);"
        )
    }
}

impl Schema for GameState {
    fn name() -> &'static str {
        GAME
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            GAME,
            " (
                id          BOOLEAN  PRIMARY KEY DEFAULT TRUE CHECK (id),
                day         INT      NOT NULL,
                phase       SMALLINT NOT NULL CHECK (phase BETWEEN 0 AND 2)
            );"
        )
    }
    fn indices() -> &'static str {
        ""
    }
}
