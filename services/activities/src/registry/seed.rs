//! Catalogue loaded into the registry at startup

use super::types::Activity;

/// Every activity offered this term with its starting roster
pub fn catalogue() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        Activity::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(["alex@mergington.edu", "sarah@mergington.edu"]),
        Activity::new(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["chris@mergington.edu", "jordan@mergington.edu"]),
        Activity::new(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["lily@mergington.edu", "mia@mergington.edu"]),
        Activity::new(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
        )
        .with_participants(["ella@mergington.edu", "noah@mergington.edu"]),
        Activity::new(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        )
        .with_participants(["liam@mergington.edu", "ava@mergington.edu"]),
        Activity::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        )
        .with_participants(["ethan@mergington.edu", "grace@mergington.edu"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soccer_team_roster() {
        let soccer = catalogue()
            .into_iter()
            .find(|a| a.name == "Soccer Team")
            .unwrap();
        assert!(soccer.is_enrolled("alex@mergington.edu"));
        assert!(soccer.is_enrolled("sarah@mergington.edu"));
    }

    #[test]
    fn test_catalogue_within_capacity() {
        let activities = catalogue();
        assert_eq!(activities.len(), 9);
        for activity in &activities {
            assert!(activity.max_participants > 0, "{}", activity.name);
            assert!(!activity.is_full(), "{} starts full", activity.name);
        }
    }
}
