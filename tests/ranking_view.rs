use scoreboard_terminal::ranking::{RankTier, rank_teams};
use scoreboard_terminal::state::TeamStore;

fn names(store: &TeamStore) -> Vec<String> {
    rank_teams(store)
        .into_iter()
        .map(|row| row.team.name)
        .collect()
}

#[test]
fn ranking_sorts_by_score_descending() {
    let store = TeamStore::new()
        .add("Low", "LOW", 1)
        .add("High", "HIG", 30)
        .add("Mid", "MID", 12);
    assert_eq!(names(&store), vec!["High", "Mid", "Low"]);

    let ranking = rank_teams(&store);
    assert_eq!(ranking.len(), store.len());
    assert_eq!(ranking[0].rank, 1);
    assert_eq!(ranking[2].rank, 3);
}

#[test]
fn ties_keep_insertion_order() {
    let store = TeamStore::new()
        .add("First", "FST", 5)
        .add("Leader", "LED", 9)
        .add("Second", "SND", 5)
        .add("Third", "THD", 5);
    assert_eq!(names(&store), vec!["Leader", "First", "Second", "Third"]);
    assert_eq!(names(&store), names(&store.clone()));
}

#[test]
fn tiers_follow_rank_position() {
    let store = (0..6).fold(TeamStore::new(), |store, i| {
        store.add(&format!("Team {i}"), &format!("T{i}"), i)
    });
    let tiers: Vec<RankTier> = rank_teams(&store).iter().map(|row| row.tier).collect();
    assert_eq!(
        tiers,
        vec![
            RankTier::Gold,
            RankTier::Silver,
            RankTier::Bronze,
            RankTier::Default,
            RankTier::Default,
            RankTier::Default,
        ]
    );
}

#[test]
fn empty_store_ranks_nothing() {
    assert!(rank_teams(&TeamStore::new()).is_empty());
}

#[test]
fn scoreboard_walkthrough() {
    let store = TeamStore::new().add("Team A", "A", 5).add("Team B", "B", 10);
    let ranking = rank_teams(&store);
    assert_eq!(ranking[0].team.name, "Team B");
    assert_eq!((ranking[0].rank, ranking[0].tier), (1, RankTier::Gold));
    assert_eq!(ranking[1].team.name, "Team A");
    assert_eq!((ranking[1].rank, ranking[1].tier), (2, RankTier::Silver));

    let a = ranking[1].id();
    let b = ranking[0].id();
    let store = (0..3).fold(store, |store, _| store.decrement(a));
    assert_eq!(store.get(a).map(|t| t.score), Some(2));
    assert_eq!(names(&store), vec!["Team B", "Team A"]);

    let store = store.delete(b);
    let ranking = rank_teams(&store);
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].team.name, "Team A");
    assert_eq!((ranking[0].rank, ranking[0].tier), (1, RankTier::Gold));

    let store = (0..3).fold(store, |store, _| store.decrement(a));
    assert_eq!(store.get(a).map(|t| t.score), Some(0));
}
