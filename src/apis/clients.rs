//! Endpoints operating on the platform's own client account.

use crate::apis::filters::{FilterKycDocuments, FilterTransactions};
use crate::endpoint::{self, Endpoint};
use crate::entities::{
    ClientBankWireDirectPostDto, ClientDto, ClientLogoPutDto, ClientPutDto, CurrencyIso,
    FundsType, KycDocumentDto, PayInBankWireDirectDto, TransactionDto, WalletDto,
};
use crate::metadata::{RequestContext, Sort};
use crate::pagination::{ListResult, Pagination};
use crate::{Client, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Client account endpoints, obtained from [`Client::clients`].
#[derive(Clone, Copy)]
pub struct ClientsApi<'a> {
    client: &'a Client,
}

impl<'a> ClientsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the client account.
    pub async fn get(&self) -> Result<ClientDto> {
        self.client.get_object(&endpoint::CLIENT_GET, &[]).await
    }

    /// Updates the client account and returns the stored state.
    pub async fn save(&self, client: &ClientPutDto) -> Result<ClientDto> {
        self.client
            .update_object(&endpoint::CLIENT_SAVE, &[], client)
            .await
    }

    /// Uploads a logo image (GIF, PNG, JPG, JPEG, BMP, PDF or DOC).
    pub async fn upload_logo(&self, image: &[u8]) -> Result<ClientDto> {
        let logo = ClientLogoPutDto {
            file: STANDARD.encode(image),
        };
        tracing::debug!(bytes = image.len(), "Uploading client logo");
        self.client
            .update_object(&endpoint::CLIENT_UPLOAD_LOGO, &[], &logo)
            .await
    }

    /// Lists the client wallets holding funds of `funds_type`.
    pub async fn wallets(
        &self,
        funds_type: FundsType,
        pagination: Option<&Pagination>,
    ) -> Result<ListResult<WalletDto>> {
        self.client
            .get_list(
                wallets_endpoint(funds_type),
                &[],
                pagination,
                &RequestContext::default(),
            )
            .await
    }

    /// Fetches the client wallet of `funds_type` in `currency`.
    pub async fn wallet(&self, funds_type: FundsType, currency: CurrencyIso) -> Result<WalletDto> {
        self.client
            .get_object(wallet_endpoint(funds_type), &[currency.as_str()])
            .await
    }

    /// Lists transactions across all client wallets.
    pub async fn transactions(
        &self,
        pagination: Option<&Pagination>,
        filter: &FilterTransactions,
        sort: Option<&Sort>,
    ) -> Result<ListResult<TransactionDto>> {
        let context = list_context(filter.to_query(), sort);
        self.client
            .get_list(&endpoint::CLIENT_TRANSACTIONS, &[], pagination, &context)
            .await
    }

    /// Lists transactions of one client wallet.
    pub async fn wallet_transactions(
        &self,
        funds_type: FundsType,
        currency: CurrencyIso,
        pagination: Option<&Pagination>,
        filter: &FilterTransactions,
        sort: Option<&Sort>,
    ) -> Result<ListResult<TransactionDto>> {
        let context = list_context(filter.to_query(), sort);
        self.client
            .get_list(
                &endpoint::CLIENT_WALLET_TRANSACTIONS,
                &[funds_type.as_str(), currency.as_str()],
                pagination,
                &context,
            )
            .await
    }

    /// Lists KYC documents uploaded by all users of the platform.
    pub async fn kyc_documents(
        &self,
        pagination: Option<&Pagination>,
        filter: &FilterKycDocuments,
        sort: Option<&Sort>,
    ) -> Result<ListResult<KycDocumentDto>> {
        let context = list_context(filter.to_query(), sort);
        self.client
            .get_list(&endpoint::CLIENT_KYC_DOCUMENTS, &[], pagination, &context)
            .await
    }

    /// Creates a bank-wire pay-in to a client wallet.
    ///
    /// Pass an idempotency key to make retries of this call safe.
    pub async fn create_bank_wire_direct(
        &self,
        idempotency_key: Option<&str>,
        bank_wire: &ClientBankWireDirectPostDto,
    ) -> Result<PayInBankWireDirectDto> {
        self.client
            .create_object(
                &endpoint::CLIENT_CREATE_BANKWIRE_DIRECT,
                &[],
                bank_wire,
                idempotency_key,
            )
            .await
    }
}

fn wallets_endpoint(funds_type: FundsType) -> &'static Endpoint {
    match funds_type {
        FundsType::Default => &endpoint::CLIENT_WALLETS_DEFAULT,
        FundsType::Fees => &endpoint::CLIENT_WALLETS_FEES,
        FundsType::Credit => &endpoint::CLIENT_WALLETS_CREDIT,
    }
}

fn wallet_endpoint(funds_type: FundsType) -> &'static Endpoint {
    match funds_type {
        FundsType::Default => &endpoint::CLIENT_WALLET_DEFAULT_WITH_CURRENCY,
        FundsType::Fees => &endpoint::CLIENT_WALLET_FEES_WITH_CURRENCY,
        FundsType::Credit => &endpoint::CLIENT_WALLET_CREDIT_WITH_CURRENCY,
    }
}

fn list_context(filter: Vec<(String, String)>, sort: Option<&Sort>) -> RequestContext {
    let context = RequestContext::new().with_query_params(filter);
    match sort {
        Some(sort) => context.with_sort(sort),
        None => context,
    }
}
