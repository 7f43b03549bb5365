use crate::commands::target::{Target, resolve_target};
use crate::commands::CommandError;
use crate::database::Database;
use crate::difficulty::DifficultyCalculator;
use crate::logic::OutcomeEngine;
use crate::models::{PlayOutcome, ScoreRecord, User};
use crate::network::{ChartSource, ScoreProvider};

/// Latest play of a user together with its reconstructed outcome.
#[derive(Debug, Clone)]
pub struct RecentPlay {
    pub user: User,
    pub score: ScoreRecord,
    pub outcome: PlayOutcome,
}

/// Fetches the most recent play (fails included) of the addressed user and
/// reconstructs its outcome.
pub async fn recent<P, S, C>(
    provider: &P,
    engine: &OutcomeEngine<S, C>,
    db: &Database,
    caller: u64,
    target: &Target,
) -> Result<RecentPlay, CommandError>
where
    P: ScoreProvider,
    S: ChartSource,
    C: DifficultyCalculator + 'static,
{
    let username = resolve_target(db, caller, target).await?;
    let user = provider.user(&username).await?;

    let score = provider
        .recent_scores(user.id, 1, true)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| CommandError::NoRecentScores(user.username.clone()))?;

    let outcome = engine.reconstruct(&score).await;

    Ok(RecentPlay {
        user,
        score,
        outcome,
    })
}
