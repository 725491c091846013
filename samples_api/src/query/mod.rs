mod common;
pub use self::common::{ApiRequest, Query, QueryCommon};

mod status;
pub use self::status::GetStatus;

mod location;
pub use self::location::SamplingLocationQuery;

mod project;
pub use self::project::ProjectQuery;

mod observed_property;
pub use self::observed_property::ObservedPropertyQuery;

mod observation;
pub use self::observation::ObservationQuery;
