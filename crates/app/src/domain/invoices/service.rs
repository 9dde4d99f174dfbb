//! Invoices service.

use async_trait::async_trait;
use mockall::automock;
use storefront::{
    carts::CartNumber,
    invoices::{Invoice, InvoiceId},
    users::UserId,
};

use crate::{
    domain::ServiceError,
    http::{ApiClient, NO_QUERY},
};

#[derive(Debug, Clone)]
pub struct HttpInvoicesService {
    client: ApiClient,
}

impl HttpInvoicesService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InvoicesService for HttpInvoicesService {
    async fn create_invoice(&self, cart: CartNumber, user: UserId) -> Result<Invoice, ServiceError> {
        Ok(self
            .client
            .post(&format!("invoice/{cart}/user/{user}"), NO_QUERY)
            .await?)
    }

    async fn invoice_document(&self, invoice: InvoiceId) -> Result<Vec<u8>, ServiceError> {
        Ok(self.client.get_bytes(&format!("invoice/{invoice}")).await?)
    }

    async fn list_invoices(&self, user: UserId) -> Result<Vec<Invoice>, ServiceError> {
        Ok(self
            .client
            .get(&format!("invoice/user/{user}"), NO_QUERY)
            .await?)
    }
}

#[automock]
#[async_trait]
pub trait InvoicesService: Send + Sync {
    /// Bill the cart; the backend empties it and returns the new invoice.
    async fn create_invoice(&self, cart: CartNumber, user: UserId) -> Result<Invoice, ServiceError>;

    /// Download the rendered invoice document.
    async fn invoice_document(&self, invoice: InvoiceId) -> Result<Vec<u8>, ServiceError>;

    /// Retrieves a user's previous invoices.
    async fn list_invoices(&self, user: UserId) -> Result<Vec<Invoice>, ServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use storefront::carts::DEFAULT_CART_NUMBER;
    use testresult::TestResult;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    use super::*;

    async fn service(server: &MockServer) -> TestResult<HttpInvoicesService> {
        Ok(HttpInvoicesService::new(ApiClient::new(&server.uri())?))
    }

    #[tokio::test]
    async fn create_invoice_for_user_cart() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/invoice/1/user/9"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 12, "userId": 9, "invoiceDate": "2024-05-01", "totalPrice": 24.2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let invoice = service(&server)
            .await?
            .create_invoice(DEFAULT_CART_NUMBER, UserId::new(9))
            .await?;

        assert_eq!(invoice.id, InvoiceId::new(12));
        assert_eq!(invoice.invoice_date, date(2024, 5, 1));

        Ok(())
    }

    #[tokio::test]
    async fn empty_cart_checkout_is_bad_request() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/invoice/1/user/9"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let result = service(&server)
            .await?
            .create_invoice(DEFAULT_CART_NUMBER, UserId::new(9))
            .await;

        assert!(
            matches!(result, Err(ServiceError::BadRequest(_))),
            "expected BadRequest, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn lists_history_and_downloads_document() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/invoice/user/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 12, "userId": 9, "invoiceDate": "2024-05-01T10:00:00", "totalPrice": 24.2},
                {"id": 13, "userId": 9, "invoiceDate": "2024-06-02", "totalPrice": 5}
            ])))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/invoice/12"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF".to_vec()))
            .mount(&server)
            .await;

        let service = service(&server).await?;

        assert_eq!(service.list_invoices(UserId::new(9)).await?.len(), 2);
        assert_eq!(service.invoice_document(InvoiceId::new(12)).await?, b"%PDF".to_vec());

        Ok(())
    }
}
