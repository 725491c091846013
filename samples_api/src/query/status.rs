use crate::types::StatusResponse;

use super::common::ApiRequest;

/// Request for the server's status and release information.
#[derive(Clone, Debug, Default)]
pub struct GetStatus;

impl ApiRequest for GetStatus {
    const PATH: &'static str = "/v1/status";
    type Response = StatusResponse;
}
