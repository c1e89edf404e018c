pub mod badge;
pub mod button;
pub mod spinner;

pub use badge::Badge;
pub use button::Button;
pub use spinner::Spinner;
