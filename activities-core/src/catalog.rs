use crate::errors::{CatalogError, CatalogResult};
use crate::models::Activity;
use crate::seed::seed_activities;
use dashmap::DashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The authoritative in-memory set of activities.
///
/// Activities are fixed once the catalog is built; only their participant
/// lists change. Signup and unregister run their membership check and the
/// list mutation under the entry's write guard, so concurrent requests for
/// the same activity cannot both pass the check.
#[derive(Debug, Default)]
pub struct ActivityCatalog {
    activities: DashMap<String, Activity>,
    // Insertion order of the names, for listing.
    order: Vec<String>,
}

/// Point-in-time copy of the catalog in insertion order. Serializes as a
/// JSON object keyed by activity name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot(Vec<(String, Activity)>);

impl IntoIterator for CatalogSnapshot {
    type Item = (String, Activity);
    type IntoIter = std::vec::IntoIter<(String, Activity)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for CatalogSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog keeping the given order. A repeated name replaces the
    /// earlier descriptor but keeps its position.
    pub fn from_activities<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        let catalog: DashMap<String, Activity> = DashMap::new();
        let mut order = Vec::new();
        for (name, activity) in activities {
            if catalog.insert(name.clone(), activity).is_none() {
                order.push(name);
            }
        }
        Self {
            activities: catalog,
            order,
        }
    }

    /// Catalog populated with the school's standard activities.
    pub fn seeded() -> Self {
        let catalog = Self::from_activities(seed_activities());
        tracing::debug!("Loaded {} seed activities", catalog.len());
        catalog
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Snapshot of every activity in the order the catalog was built.
    pub fn get_all(&self) -> CatalogSnapshot {
        CatalogSnapshot(
            self.order
                .iter()
                .filter_map(|name| {
                    self.activities
                        .get(name)
                        .map(|entry| (name.clone(), entry.value().clone()))
                })
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|entry| entry.value().clone())
    }

    /// Appends `email` to the activity's participants.
    pub fn signup(&self, activity_name: &str, email: &str) -> CatalogResult<()> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| CatalogError::ActivityNotFound(activity_name.to_string()))?;

        if activity.is_registered(email) {
            return Err(CatalogError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        tracing::debug!(
            activity = activity_name,
            email,
            participants = activity.participants.len(),
            "Participant signed up"
        );
        Ok(())
    }

    /// Removes `email` from the activity, keeping the order of the others.
    pub fn unregister(&self, activity_name: &str, email: &str) -> CatalogResult<()> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| CatalogError::ActivityNotFound(activity_name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| CatalogError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        tracing::debug!(
            activity = activity_name,
            email,
            participants = activity.participants.len(),
            "Participant unregistered"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> ActivityCatalog {
        ActivityCatalog::from_activities([(
            "Robotics".to_string(),
            Activity::new("Build robots", "Mondays", 2)
                .with_participants(["a@mergington.edu", "b@mergington.edu"]),
        )])
    }

    #[test]
    fn test_signup_ignores_capacity() {
        let catalog = small_catalog();

        catalog.signup("Robotics", "c@mergington.edu").unwrap();

        let robotics = catalog.get("Robotics").unwrap();
        assert_eq!(robotics.participants.len(), 3);
        assert!(robotics.participants.len() > robotics.max_participants as usize);
    }

    #[test]
    fn test_unregister_preserves_order() {
        let catalog = small_catalog();
        catalog.signup("Robotics", "c@mergington.edu").unwrap();

        catalog.unregister("Robotics", "b@mergington.edu").unwrap();

        assert_eq!(
            catalog.get("Robotics").unwrap().participants,
            vec!["a@mergington.edu", "c@mergington.edu"]
        );
    }

    #[test]
    fn test_failed_operations_leave_state_untouched() {
        let catalog = small_catalog();
        let before = catalog.get_all();

        assert!(catalog.signup("Robotics", "a@mergington.edu").is_err());
        assert!(catalog.unregister("Robotics", "z@mergington.edu").is_err());
        assert!(catalog.signup("Knitting", "a@mergington.edu").is_err());

        assert_eq!(catalog.get_all(), before);
    }

    #[test]
    fn test_get_all_keeps_insertion_order() {
        let catalog = ActivityCatalog::from_activities([
            ("Zoology".to_string(), Activity::new("Animals", "Mondays", 5)),
            ("Archery".to_string(), Activity::new("Bows", "Tuesdays", 5)),
            ("Zoology".to_string(), Activity::new("Animals again", "Fridays", 8)),
            ("Music".to_string(), Activity::new("Songs", "Thursdays", 5)),
        ]);

        let snapshot: Vec<_> = catalog.get_all().into_iter().collect();
        assert_eq!(catalog.len(), 3);
        let names: Vec<&str> = snapshot.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Zoology", "Archery", "Music"]);
        assert_eq!(snapshot[0].1.schedule, "Fridays");
    }

    #[test]
    fn test_snapshot_serializes_as_ordered_object() {
        let catalog = ActivityCatalog::from_activities([
            ("Zoology".to_string(), Activity::new("Animals", "Mondays", 5)),
            ("Archery".to_string(), Activity::new("Bows", "Tuesdays", 5)),
        ]);

        let json = serde_json::to_string(&catalog.get_all()).unwrap();

        assert!(json.starts_with("{\"Zoology\":{"));
        assert!(json.find("Zoology").unwrap() < json.find("Archery").unwrap());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Archery"]["max_participants"], 5);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ActivityCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.get_all(), CatalogSnapshot::default());
        assert_eq!(
            catalog.unregister("Chess Club", "a@mergington.edu"),
            Err(CatalogError::ActivityNotFound("Chess Club".to_string()))
        );
    }
}
