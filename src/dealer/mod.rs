//! The scheduled flop, turn and river jobs.
pub mod announce;
pub mod jobs;
pub mod schedule;

pub use announce::Announcer;
pub use jobs::Dealer;

use chrono::Local;

impl Dealer {
    /// Fires each street at its configured local time, forever.
    ///
    /// Jobs are spawned and not awaited, so a slow job never delays the
    /// next tick. Nothing stops two jobs from overlapping.
    pub async fn serve(self) {
        let schedule = self.service().settings().schedule;
        let mut last = Local::now();
        loop {
            let now = Local::now().max(last);
            let Some((street, at)) = schedule.next(&now) else {
                log::error!("no upcoming {:?} after {}", schedule, now);
                return;
            };
            log::info!("next draw is the {} at {}", street, at);
            let wait = (at - Local::now()).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;
            last = at;
            let dealer = self.clone();
            tokio::spawn(async move { dealer.tick(street).await });
        }
    }
}
