use rand::Rng;

use crate::state::TeamStore;

const DEMO_TEAMS: [(&str, &str); 6] = [
    ("Null Pointers", "NUL"),
    ("Borrow Checkers", "BRW"),
    ("Segfault Squad", "SEG"),
    ("Async Avengers", "ASY"),
    ("Heap Heroes", "HEP"),
    ("Stack Smashers", "STK"),
];

pub fn seed_demo_teams(store: TeamStore) -> TeamStore {
    let mut rng = rand::thread_rng();
    seed_demo_teams_with(store, &mut rng)
}

pub fn seed_demo_teams_with<R: Rng>(store: TeamStore, rng: &mut R) -> TeamStore {
    DEMO_TEAMS.iter().fold(store, |store, (name, code)| {
        store.add(name, code, rng.gen_range(0..=20))
    })
}

pub fn demo_team_count() -> usize {
    DEMO_TEAMS.len()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn demo_scores_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let store = seed_demo_teams_with(TeamStore::new(), &mut rng);
        assert_eq!(store.len(), demo_team_count());
        assert!(store.teams().iter().all(|t| (0..=20).contains(&t.score)));
    }
}
