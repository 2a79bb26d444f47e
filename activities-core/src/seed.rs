//! Activities loaded into the catalog at startup.

use crate::models::Activity;

pub fn seed_activities() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team".to_string(),
            Activity::new(
                "Practice and compete in inter-school basketball games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["james@mergington.edu"]),
        ),
        (
            "Tennis Club".to_string(),
            Activity::new(
                "Improve your serve and play friendly matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
                10,
            )
            .with_participants(["lucas@mergington.edu"]),
        ),
        (
            "Art Studio".to_string(),
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Act, direct and produce the school plays",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            )
            .with_participants(["isabella@mergington.edu"]),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Build argumentation skills and compete in debate tournaments",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["ethan@mergington.edu"]),
        ),
        (
            "Math Olympiad".to_string(),
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                16,
            )
            .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        ),
    ]
}
