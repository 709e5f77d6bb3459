pub mod booking;
pub mod client;
pub mod goal;
pub mod log;
pub mod payment;
pub mod progress;
pub mod trainer;
pub mod user;
pub mod workout;

pub use booking::{Booking, BookingStatus};
pub use client::{Client, ClientStatus};
pub use goal::{Goal, GoalStatus};
pub use log::TrainingLog;
pub use payment::{Payment, PaymentStatus};
pub use progress::{Measurement, MeasurementType};
pub use trainer::{Trainer, TrainerStatus};
pub use user::{User, UserType};
pub use workout::{Exercise, WorkoutPlan};
