use crate::domain::payment::{NewPaymentTransaction, PaymentTransaction};
use crate::store::{PaymentStore, PaymentTransactionUpdate, StoreError};

#[derive(Clone)]
pub struct HttpPaymentStore {
    pub base_url: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

impl HttpPaymentStore {
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let resp = req
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Unavailable(format!(
                "HTTP_{} {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            )));
        }

        Ok(resp)
    }
}

#[async_trait::async_trait]
impl PaymentStore for HttpPaymentStore {
    async fn create(&self, transaction: NewPaymentTransaction) -> Result<PaymentTransaction, StoreError> {
        let url = format!("{}/payments", self.base_url);
        let resp = self.send(self.client.post(url).json(&transaction)).await?;
        resp.json().await.map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn get_pending(&self) -> Result<Vec<PaymentTransaction>, StoreError> {
        let url = format!("{}/payments/pending", self.base_url);
        let resp = self.send(self.client.get(url)).await?;
        resp.json().await.map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn update(
        &self,
        transaction_id: &str,
        update: PaymentTransactionUpdate,
    ) -> Result<PaymentTransaction, StoreError> {
        let url = format!("{}/payments/{}", self.base_url, transaction_id);
        let resp = self.send(self.client.patch(url).json(&update)).await?;
        resp.json().await.map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}
