use super::schema::*;
use super::store::Store;
use crate::Balance;
use crate::Day;
use crate::Error;
use crate::Result;
use crate::cards::Arcana;
use crate::cards::Card;
use crate::game::*;
use deadpool_postgres::Object;
use deadpool_postgres::Pool;
use tokio_postgres::NoTls;
use tokio_postgres::Row;
use tokio_postgres::error::SqlState;

const USER_COLUMNS: &str = "uid, balance";
const BOARD_COLUMNS: &str = "day, flop1, flop2, flop3, turn, river";
const SEAT_COLUMNS: &str = "uid, day, hole1, hole2, tarot1, tarot2, tarot3";

const SELECT_USER: &str =
    const_format::concatcp!("SELECT ", USER_COLUMNS, " FROM ", USERS, " WHERE uid = $1");
const SELECT_USERS: &str =
    const_format::concatcp!("SELECT ", USER_COLUMNS, " FROM ", USERS, " ORDER BY uid");
const INSERT_USER: &str =
    const_format::concatcp!("INSERT INTO ", USERS, " (", USER_COLUMNS, ") VALUES ($1, $2)");
const UPDATE_USER: &str =
    const_format::concatcp!("UPDATE ", USERS, " SET balance = $2 WHERE uid = $1");
const DELETE_USER: &str = const_format::concatcp!("DELETE FROM ", USERS, " WHERE uid = $1");

const SELECT_BOARD: &str =
    const_format::concatcp!("SELECT ", BOARD_COLUMNS, " FROM ", BOARDS, " WHERE day = $1");
const INSERT_BOARD: &str = const_format::concatcp!(
    "INSERT INTO ",
    BOARDS,
    " (",
    BOARD_COLUMNS,
    ") VALUES ($1, $2, $3, $4, $5, $6)"
);
const DELETE_BOARD: &str = const_format::concatcp!("DELETE FROM ", BOARDS, " WHERE day = $1");

const SELECT_SEAT: &str = const_format::concatcp!(
    "SELECT ",
    SEAT_COLUMNS,
    " FROM ",
    USERS_BOARDS,
    " WHERE uid = $1 AND day = $2"
);
const INSERT_SEAT: &str = const_format::concatcp!(
    "INSERT INTO ",
    USERS_BOARDS,
    " (",
    SEAT_COLUMNS,
    ") VALUES ($1, $2, $3, $4, $5, $6, $7)"
);
const DELETE_SEAT: &str =
    const_format::concatcp!("DELETE FROM ", USERS_BOARDS, " WHERE uid = $1 AND day = $2");

const SELECT_HAND: &str = const_format::concatcp!(
    "SELECT u.uid, u.balance, ",
    "s.uid, s.day, s.hole1, s.hole2, s.tarot1, s.tarot2, s.tarot3, ",
    "b.day, b.flop1, b.flop2, b.flop3, b.turn, b.river FROM ",
    USERS,
    " u JOIN ",
    USERS_BOARDS,
    " s ON s.uid = u.uid JOIN ",
    BOARDS,
    " b ON b.day = s.day WHERE u.uid = $1 AND s.day = $2"
);

const SELECT_GAME: &str = const_format::concatcp!("SELECT day, phase FROM ", GAME);
const SELECT_GAME_FOR_UPDATE: &str =
    const_format::concatcp!("SELECT day, phase FROM ", GAME, " FOR UPDATE");
const INSERT_GAME: &str = const_format::concatcp!(
    "INSERT INTO ",
    GAME,
    " (id, day, phase) VALUES (TRUE, $1, $2) ON CONFLICT (id) DO NOTHING"
);
const UPDATE_GAME: &str = const_format::concatcp!("UPDATE ", GAME, " SET day = $1, phase = $2");

/// PostgreSQL-backed [`Store`] over a bounded connection pool.
pub struct Postgres {
    pool: Pool,
}

impl Postgres {
    /// Builds a pool of at most `size` connections to `url`.
    ///
    /// Connections are opened lazily; call [`migrate`](Self::migrate) to
    /// verify the database is reachable.
    pub fn connect(url: &str, size: usize) -> anyhow::Result<Self> {
        log::info!("connecting to database");
        let config = deadpool_postgres::Config {
            url: Some(url.to_string()),
            pool: Some(deadpool_postgres::PoolConfig::new(size)),
            ..Default::default()
        };
        let pool = config.create_pool(Some(deadpool_postgres::Runtime::Tokio1), NoTls)?;
        Ok(Self { pool })
    }

    /// Creates any missing tables and indices.
    pub async fn migrate(&self) -> Result<()> {
        let client = self.client().await?;
        client
            .execute("SET client_min_messages TO WARNING", &[])
            .await?;
        for sql in migrations().iter().filter(|sql| !sql.is_empty()) {
            client.batch_execute(sql).await?;
        }
        log::info!("schema up to date");
        Ok(())
    }

    async fn client(&self) -> Result<Object> {
        Ok(self.pool.get().await?)
    }
}

/// Maps primary-key conflicts to [`Error::Duplicate`].
fn conflict(what: String) -> impl FnOnce(tokio_postgres::Error) -> Error {
    move |e| match e.code() {
        Some(code) if *code == SqlState::UNIQUE_VIOLATION => Error::Duplicate(what),
        _ => Error::Database(e),
    }
}

fn unseeded() -> Error {
    Error::NotFound("game state".into())
}

fn user(row: &Row, at: usize) -> User {
    User::new(row.get::<_, String>(at), row.get::<_, Balance>(at + 1))
}

fn board(row: &Row, at: usize) -> Result<Board> {
    let card = |i: usize| Card::try_from(row.get::<_, &str>(at + i));
    Ok(Board::new(
        row.get::<_, Day>(at),
        [card(1)?, card(2)?, card(3)?, card(4)?, card(5)?],
    ))
}

fn seat(row: &Row, at: usize) -> Result<UserBoard> {
    let card = |i: usize| Card::try_from(row.get::<_, &str>(at + i));
    let tarot = |i: usize| {
        row.get::<_, Option<&str>>(at + i)
            .map(Arcana::try_from)
            .transpose()
    };
    Ok(UserBoard::new(
        row.get::<_, String>(at),
        row.get::<_, Day>(at + 1),
        [card(2)?, card(3)?],
    )
    .with_tarots([tarot(4)?, tarot(5)?, tarot(6)?]))
}

fn game(row: &Row) -> Result<GameState> {
    Ok(GameState::new(
        row.get::<_, Day>(0),
        Phase::try_from(row.get::<_, i16>(1))?,
    ))
}

#[async_trait::async_trait]
impl Store for Postgres {
    async fn get_user(&self, uid: &str) -> Result<Option<User>> {
        let client = self.client().await?;
        let row = client.query_opt(SELECT_USER, &[&uid]).await?;
        Ok(row.map(|row| user(&row, 0)))
    }
    async fn get_users(&self) -> Result<Vec<User>> {
        let client = self.client().await?;
        let rows = client.query(SELECT_USERS, &[]).await?;
        Ok(rows.iter().map(|row| user(row, 0)).collect())
    }
    async fn create_user(&self, user: &User) -> Result<()> {
        let client = self.client().await?;
        client
            .execute(INSERT_USER, &[&user.uid, &user.balance])
            .await
            .map_err(conflict(format!("user {}", user.uid)))?;
        Ok(())
    }
    async fn update_user(&self, user: &User) -> Result<()> {
        let client = self.client().await?;
        client
            .execute(UPDATE_USER, &[&user.uid, &user.balance])
            .await?;
        Ok(())
    }
    async fn delete_user(&self, uid: &str) -> Result<()> {
        let client = self.client().await?;
        client.execute(DELETE_USER, &[&uid]).await?;
        Ok(())
    }

    async fn get_board(&self, day: Day) -> Result<Option<Board>> {
        let client = self.client().await?;
        let row = client.query_opt(SELECT_BOARD, &[&day]).await?;
        row.map(|row| board(&row, 0)).transpose()
    }
    async fn create_board(&self, board: &Board) -> Result<()> {
        let client = self.client().await?;
        let codes = board.cards().map(|c| c.to_string());
        client
            .execute(
                INSERT_BOARD,
                &[
                    &board.day(),
                    &codes[0],
                    &codes[1],
                    &codes[2],
                    &codes[3],
                    &codes[4],
                ],
            )
            .await
            .map_err(conflict(format!("board for day {}", board.day())))?;
        Ok(())
    }
    async fn delete_board(&self, day: Day) -> Result<()> {
        let client = self.client().await?;
        client.execute(DELETE_BOARD, &[&day]).await?;
        Ok(())
    }

    async fn get_user_board(&self, uid: &str, day: Day) -> Result<Option<UserBoard>> {
        let client = self.client().await?;
        let row = client.query_opt(SELECT_SEAT, &[&uid, &day]).await?;
        row.map(|row| seat(&row, 0)).transpose()
    }
    async fn create_user_board(&self, seat: &UserBoard) -> Result<()> {
        let client = self.client().await?;
        let hole = seat.hole().map(|c| c.to_string());
        let tarots = seat.tarots().map(|t| t.map(|a| a.code()));
        client
            .execute(
                INSERT_SEAT,
                &[
                    &seat.uid(),
                    &seat.day(),
                    &hole[0],
                    &hole[1],
                    &tarots[0],
                    &tarots[1],
                    &tarots[2],
                ],
            )
            .await
            .map_err(conflict(format!(
                "hand for user {} on day {}",
                seat.uid(),
                seat.day()
            )))?;
        Ok(())
    }
    async fn delete_user_board(&self, uid: &str, day: Day) -> Result<()> {
        let client = self.client().await?;
        client.execute(DELETE_SEAT, &[&uid, &day]).await?;
        Ok(())
    }

    async fn get_game_state(&self) -> Result<GameState> {
        let client = self.client().await?;
        let row = client.query_opt(SELECT_GAME, &[]).await?;
        row.as_ref().map(game).transpose()?.ok_or_else(unseeded)
    }
    async fn create_game_state(&self, state: GameState) -> Result<bool> {
        let client = self.client().await?;
        let n = client
            .execute(INSERT_GAME, &[&state.day, &i16::from(state.phase)])
            .await?;
        Ok(n == 1)
    }
    async fn update_game_state(&self, state: GameState) -> Result<()> {
        let client = self.client().await?;
        let n = client
            .execute(UPDATE_GAME, &[&state.day, &i16::from(state.phase)])
            .await?;
        match n {
            0 => Err(unseeded()),
            _ => Ok(()),
        }
    }

    async fn init_user(&self, user: &User) -> Result<()> {
        let mut client = self.client().await?;
        let tx = client.transaction().await?;
        tx.execute(INSERT_USER, &[&user.uid, &user.balance])
            .await
            .map_err(conflict(format!("user {}", user.uid)))?;
        tx.commit().await?;
        Ok(())
    }
    async fn create_board_increment_day(&self, cards: [Card; 5]) -> Result<Board> {
        let mut client = self.client().await?;
        let tx = client.transaction().await?;
        let row = tx
            .query_opt(SELECT_GAME_FOR_UPDATE, &[])
            .await?
            .ok_or_else(unseeded)?;
        let state = game(&row)?;
        state.expect(Phase::AwaitingFlop)?;
        let board = Board::new(state.day + 1, cards);
        let codes = cards.map(|c| c.to_string());
        tx.execute(
            INSERT_BOARD,
            &[
                &board.day(),
                &codes[0],
                &codes[1],
                &codes[2],
                &codes[3],
                &codes[4],
            ],
        )
        .await
        .map_err(conflict(format!("board for day {}", board.day())))?;
        tx.execute(UPDATE_GAME, &[&board.day(), &i16::from(state.phase)])
            .await?;
        tx.commit().await?;
        Ok(board)
    }

    async fn get_user_hand_on_day(&self, uid: &str, day: Day) -> Result<Option<UserHand>> {
        let client = self.client().await?;
        let row = client.query_opt(SELECT_HAND, &[&uid, &day]).await?;
        row.map(|row| -> Result<UserHand> {
            Ok(UserHand::new(user(&row, 0), seat(&row, 2)?, board(&row, 9)?))
        })
        .transpose()
    }
}
