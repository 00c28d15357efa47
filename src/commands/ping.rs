use crate::embed::Reply;

pub fn execute() -> Reply {
    Reply::text("Pong!")
}
