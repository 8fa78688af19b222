pub use super::division::Entity as Division;
pub use super::location::Entity as Location;
pub use super::location_availability::Entity as LocationAvailability;
pub use super::previous_game::Entity as PreviousGame;
pub use super::team::Entity as Team;
pub use super::team_availability::Entity as TeamAvailability;
pub use super::timeslot::Entity as Timeslot;
