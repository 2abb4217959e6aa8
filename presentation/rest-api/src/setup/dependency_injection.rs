use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::fallback::FallbackCartRepository;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::memory::InMemoryConversationRepository;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::cached::CachedProductRepository;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::profile::repository::ProfileRepositoryPostgres;

use openai::chat_assistant::ChatAssistantOpenAI;
use openai::client::OpenAIClient;

use payments::{
    AbacatePayGateway, MercadoPagoGateway, PayPalGateway, ProviderClient, StripeGateway,
};

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::import_legacy::ImportLegacyCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::chat::reset::ResetConversationUseCaseImpl;
use business::application::chat::send_message::SendChatMessageUseCaseImpl;
use business::application::order::checkout::CheckoutUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::payment::initiate::InitiatePaymentUseCaseImpl;
use business::application::payment::list_providers::ListPaymentProvidersUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_catalog::GetCatalogUseCaseImpl;
use business::application::product::get_categories::GetCategoriesUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::profile::get::GetProfileUseCaseImpl;
use business::application::profile::save::SaveProfileUseCaseImpl;
use business::domain::payment::services::PaymentGateway;

use crate::api::cart::routes::CartApi;
use crate::api::catalog::routes::CatalogApi;
use crate::api::chat::routes::ChatApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::order::routes::OrderApi;
use crate::api::payment::routes::PaymentApi;
use crate::api::profile::routes::ProfileApi;
use crate::config::app_config::AppConfig;
use crate::config::payment_config::PaymentConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub catalog_api: CatalogApi,
    pub cart_api: CartApi,
    pub profile_api: ProfileApi,
    pub order_api: OrderApi,
    pub chat_api: ChatApi,
    pub payment_api: PaymentApi,
}

/// One gateway per provider with credentials.
fn build_gateways(config: &PaymentConfig) -> Vec<Arc<dyn PaymentGateway>> {
    let client = ProviderClient::new();
    let mut gateways: Vec<Arc<dyn PaymentGateway>> = Vec::new();

    if let Some(token) = &config.mercadopago_access_token {
        gateways.push(Arc::new(MercadoPagoGateway::new(client.clone(), token.clone())));
    }
    if let Some(key) = &config.stripe_secret_key {
        gateways.push(Arc::new(StripeGateway::new(client.clone(), key.clone())));
    }
    if let Some(paypal) = &config.paypal {
        gateways.push(Arc::new(PayPalGateway::new(
            client.clone(),
            paypal.client_id.clone(),
            paypal.client_secret.clone(),
            paypal.sandbox,
        )));
    }
    if let Some(key) = &config.abacatepay_api_key {
        gateways.push(Arc::new(AbacatePayGateway::new(client, key.clone())));
    }

    gateways
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> Self {
        let restaurant = &config.restaurant;

        // Infrastructure adapters
        let product_repository = Arc::new(CachedProductRepository::new(
            Arc::new(ProductRepositoryPostgres::new(pool.clone())),
            restaurant.catalog_cache_ttl,
        ));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(FallbackCartRepository::new(Arc::new(
            CartRepositoryPostgres::new(pool.clone()),
        )));
        let profile_repository = Arc::new(ProfileRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool));
        let conversation_repository = Arc::new(InMemoryConversationRepository::with_limits(
            restaurant.chat_idle_ttl,
            restaurant.chat_max_sessions,
        ));

        let openai_client = OpenAIClient::new(config.openai.api_key.clone())
            .with_base_url(config.openai.base_url.clone())
            .with_model(config.openai.model.clone());
        let chat_assistant = Arc::new(ChatAssistantOpenAI::new(openai_client));

        let gateways = build_gateways(&config.payment);
        tracing::info!(
            "Payment providers enabled: {:?}",
            gateways.iter().map(|g| g.provider().to_string()).collect::<Vec<_>>()
        );

        // Catalog use cases
        let logger = TracingLogger::shared("catalog");
        let search_use_case = Arc::new(SearchProductsUseCaseImpl::new(
            product_repository.clone(),
            logger.clone(),
            restaurant.catalog_cache_ttl,
        ));
        let catalog_api = CatalogApi::new(
            Arc::new(GetCatalogUseCaseImpl {
                repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCategoriesUseCaseImpl {
                repository: category_repository,
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            search_use_case.clone(),
            Arc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Cart use cases
        let logger = TracingLogger::shared("cart");
        let cart_api = CartApi::new(
            Arc::new(GetCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(AddCartItemUseCaseImpl {
                repository: cart_repository.clone(),
                product_repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateCartQuantityUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveCartItemUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ClearCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ImportLegacyCartUseCaseImpl {
                repository: cart_repository.clone(),
                product_repository: product_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Profile use cases
        let logger = TracingLogger::shared("profile");
        let profile_api = ProfileApi::new(
            Arc::new(GetProfileUseCaseImpl {
                repository: profile_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SaveProfileUseCaseImpl {
                repository: profile_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Checkout use cases
        let logger = TracingLogger::shared("checkout");
        let order_api = OrderApi::new(
            Arc::new(CheckoutUseCaseImpl {
                cart_repository,
                profile_repository,
                product_repository,
                order_repository: order_repository.clone(),
                logger: logger.clone(),
                whatsapp_number: restaurant.whatsapp_number.clone(),
                persist_orders: restaurant.persist_orders,
            }),
            Arc::new(GetOrderByIdUseCaseImpl {
                repository: order_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Chat use cases
        let logger = TracingLogger::shared("chat");
        let chat_api = ChatApi::new(
            Arc::new(SendChatMessageUseCaseImpl {
                repository: conversation_repository.clone(),
                search: search_use_case,
                completion: chat_assistant,
                logger: logger.clone(),
                restaurant_name: restaurant.name.clone(),
            }),
            Arc::new(ResetConversationUseCaseImpl {
                repository: conversation_repository,
                logger: logger.clone(),
            }),
        );

        // Payment use cases
        let logger = TracingLogger::shared("payment");
        let payment_api = PaymentApi::new(
            Arc::new(ListPaymentProvidersUseCaseImpl {
                gateways: gateways.clone(),
            }),
            Arc::new(InitiatePaymentUseCaseImpl {
                gateways,
                order_repository,
                logger,
                public_base_url: restaurant.public_base_url.clone(),
            }),
        );

        Self {
            health_api: HealthApi::new(),
            catalog_api,
            cart_api,
            profile_api,
            order_api,
            chat_api,
            payment_api,
        }
    }
}
