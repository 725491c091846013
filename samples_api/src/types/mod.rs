mod meta;
pub use self::meta::{PaginatedResponse, Reference, StatusResponse};

mod location;
pub use self::location::SamplingLocation;

mod project;
pub use self::project::Project;

mod observed_property;
pub use self::observed_property::{ObservedProperty, Unit};

mod observation;
pub use self::observation::{NumericResult, Observation, Quantity};
