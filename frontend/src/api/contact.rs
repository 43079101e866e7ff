//! 联系表单服务

use fournil_shared::ContactMessage;
use fournil_shared::error::ApiResult;

use super::client::RestClient;

#[derive(Clone)]
pub struct ContactService {
    client: RestClient,
}

impl ContactService {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub async fn send(&self, message: ContactMessage) -> ApiResult<()> {
        self.client
            .execute(&message)
            .await
            .map_err(|e| e.in_op("contact.send"))
    }
}
