//! Fixed activity set the directory starts with.

use super::model::{Activity, ActivityMap};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Competitive basketball training and tournaments",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["james@mergington.edu"],
    },
    SeedActivity {
        name: "Tennis Club",
        description: "Tennis skills development and friendly matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        max_participants: 10,
        participants: &["alex@mergington.edu", "sarah@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Painting, drawing, and visual arts exploration",
        schedule: "Mondays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["isabella@mergington.edu"],
    },
    SeedActivity {
        name: "Music Ensemble",
        description: "Orchestra and band performance group",
        schedule: "Wednesdays and Fridays, 4:00 PM - 5:30 PM",
        max_participants: 25,
        participants: &["noah@mergington.edu", "ava@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &["lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Explore science through experiments and projects",
        schedule: "Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["mason@mergington.edu", "chloe@mergington.edu"],
    },
];

/// Build a fresh copy of the seed activities, in their canonical order.
pub fn activities() -> ActivityMap {
    SEED.iter()
        .map(|s| {
            let activity = Activity::new(s.description, s.schedule, s.max_participants)
                .with_participants(s.participants.iter().copied());
            (s.name, activity)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_activities_in_order() {
        let map = activities();
        assert_eq!(map.len(), 9);
        let names: Vec<_> = map.names().collect();
        assert_eq!(names.first(), Some(&"Chess Club"));
        assert_eq!(names.last(), Some(&"Science Club"));
    }

    #[test]
    fn chess_club_starts_with_two() {
        let map = activities();
        let chess = map.get("Chess Club").unwrap();
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
        assert_eq!(chess.max_participants, 12);
    }

    #[test]
    fn rosters_have_no_duplicates() {
        for (name, activity) in activities().iter() {
            let mut seen = std::collections::HashSet::new();
            for p in &activity.participants {
                assert!(seen.insert(p), "duplicate {p} in {name}");
            }
        }
    }

    #[test]
    fn every_call_is_a_fresh_copy() {
        let mut first = activities();
        first
            .get_mut("Debate Team")
            .unwrap()
            .add_participant("new@mergington.edu".into());
        assert_eq!(activities().get("Debate Team").unwrap().participants.len(), 1);
    }
}
