use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::message::{format_order_message, whatsapp_link};
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::checkout::{CheckoutParams, CheckoutResult, CheckoutUseCase};
use crate::domain::product::repository::ProductRepository;
use crate::domain::profile::repository::ProfileRepository;

/// Turns the session's cart into an order and hands it off to WhatsApp.
///
/// When `persist_orders` is set the order is written first; a failed write is
/// logged and the checkout still completes so the customer's message goes out.
pub struct CheckoutUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub profile_repository: Arc<dyn ProfileRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
    pub whatsapp_number: String,
    pub persist_orders: bool,
}

impl CheckoutUseCaseImpl {
    async fn ensure_items_available(&self, order: &Order) -> Result<(), OrderError> {
        for item in &order.items {
            match self.product_repository.get_by_id(item.product_id).await {
                Ok(product) if product.is_available => {}
                Ok(_) | Err(RepositoryError::NotFound) => {
                    return Err(OrderError::ItemUnavailable(item.name.clone()));
                }
                Err(e) => return Err(OrderError::Repository(e)),
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<CheckoutResult, OrderError> {
        self.logger
            .info(&format!("Checking out session: {}", params.session_id));

        let cart = self
            .cart_repository
            .get(&params.session_id)
            .await?
            .filter(|cart| !cart.is_empty())
            .ok_or(OrderError::EmptyCart)?;

        let profile = self
            .profile_repository
            .get(&params.session_id)
            .await?
            .ok_or(OrderError::MissingProfile)?;

        let order = Order::place(&cart, &profile, params.payment_method, params.notes)?;
        self.ensure_items_available(&order).await?;

        let message = format_order_message(&order);
        let whatsapp_url = whatsapp_link(&self.whatsapp_number, &message)?;

        let persisted = if self.persist_orders {
            match self.order_repository.save(&order).await {
                Ok(()) => true,
                Err(e) => {
                    self.logger.warn(&format!(
                        "Failed to persist order {}, continuing with WhatsApp hand-off: {}",
                        order.reference, e
                    ));
                    false
                }
            }
        } else {
            false
        };

        if let Err(e) = self.cart_repository.delete(&params.session_id).await {
            self.logger.warn(&format!(
                "Failed to clear cart for session {} after checkout: {}",
                params.session_id, e
            ));
        }

        self.logger.info(&format!(
            "Order {} placed with total {}",
            order.reference, order.total
        ));

        Ok(CheckoutResult {
            order,
            persisted,
            message,
            whatsapp_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, CartAction, CartItem};
    use crate::domain::order::value_objects::{OrderStatus, PaymentMethod};
    use crate::domain::product::model::Product;
    use crate::domain::profile::errors::ProfileError;
    use crate::domain::profile::model::DeliveryProfile;
    use crate::domain::shared::value_objects::{Price, SessionId};
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get(&self, session_id: &SessionId) -> Result<Option<Cart>, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn delete(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ProfileRepo {}

        #[async_trait]
        impl ProfileRepository for ProfileRepo {
            async fn get(&self, session_id: &SessionId) -> Result<Option<DeliveryProfile>, RepositoryError>;
            async fn save(&self, profile: &DeliveryProfile) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn get_available(&self) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
            async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: Uuid, available: bool) -> Product {
        Product::from_repository(
            id,
            "X-Tudo".to_string(),
            None,
            "Lanches".to_string(),
            Price::from_cents(3500),
            false,
            None,
            None,
            available,
            false,
            Utc::now(),
            Utc::now(),
        )
    }

    fn cart(session_id: &SessionId, product_id: Uuid) -> Cart {
        let mut cart = Cart::new(session_id.clone());
        cart.apply(CartAction::Add(
            CartItem::from_product(&product(product_id, true), 2).unwrap(),
        ))
        .unwrap();
        cart
    }

    fn profile(session_id: &SessionId) -> DeliveryProfile {
        DeliveryProfile::from_repository(
            session_id.clone(),
            "Beatriz".to_string(),
            "21998887777".to_string(),
            "Rua do Catete, 90".to_string(),
            None,
            None,
            Utc::now(),
        )
    }

    struct Repos {
        cart: MockCartRepo,
        profile: MockProfileRepo,
        product: MockProductRepo,
        order: MockOrderRepo,
    }

    fn happy_repos(product_id: Uuid) -> Repos {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_get()
            .returning(move |session_id| Ok(Some(cart(session_id, product_id))));
        cart_repo.expect_delete().returning(|_| Ok(()));

        let mut profile_repo = MockProfileRepo::new();
        profile_repo
            .expect_get()
            .returning(|session_id| Ok(Some(profile(session_id))));

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|id| Ok(product(id, true)));

        Repos {
            cart: cart_repo,
            profile: profile_repo,
            product: product_repo,
            order: MockOrderRepo::new(),
        }
    }

    fn use_case(repos: Repos, persist_orders: bool) -> CheckoutUseCaseImpl {
        CheckoutUseCaseImpl {
            cart_repository: Arc::new(repos.cart),
            profile_repository: Arc::new(repos.profile),
            product_repository: Arc::new(repos.product),
            order_repository: Arc::new(repos.order),
            logger: mock_logger(),
            whatsapp_number: "5511999990000".to_string(),
            persist_orders,
        }
    }

    fn params() -> CheckoutParams {
        CheckoutParams {
            session_id: SessionId::new("session-1"),
            payment_method: PaymentMethod::Pix,
            notes: Some("Sem cebola".to_string()),
        }
    }

    #[tokio::test]
    async fn should_place_order_and_build_whatsapp_link() {
        let mut repos = happy_repos(Uuid::new_v4());
        repos.order.expect_save().times(1).returning(|_| Ok(()));

        let result = use_case(repos, true).execute(params()).await.unwrap();

        assert!(result.persisted);
        assert_eq!(result.order.status, OrderStatus::Pending);
        assert_eq!(result.order.total, Price::from_cents(7000));
        assert!(result.message.contains("2x X-Tudo (R$ 35,00) = R$ 70,00"));
        assert!(result.message.ends_with("*Observações:* Sem cebola"));
        assert!(
            result
                .whatsapp_url
                .starts_with("https://wa.me/5511999990000?text=")
        );
    }

    #[tokio::test]
    async fn should_continue_when_order_persistence_fails() {
        let mut repos = happy_repos(Uuid::new_v4());
        repos
            .order
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = use_case(repos, true).execute(params()).await.unwrap();

        assert!(!result.persisted);
        assert!(!result.whatsapp_url.is_empty());
    }

    #[tokio::test]
    async fn should_skip_persistence_when_disabled() {
        let mut repos = happy_repos(Uuid::new_v4());
        repos.order.expect_save().never();

        let result = use_case(repos, false).execute(params()).await.unwrap();

        assert!(!result.persisted);
    }

    #[tokio::test]
    async fn should_clear_cart_after_checkout() {
        let product_id = Uuid::new_v4();
        let mut repos = happy_repos(product_id);
        repos.cart = MockCartRepo::new();
        repos
            .cart
            .expect_get()
            .returning(move |session_id| Ok(Some(cart(session_id, product_id))));
        repos
            .cart
            .expect_delete()
            .withf(|session_id| session_id.as_str() == "session-1")
            .times(1)
            .returning(|_| Ok(()));
        repos.order.expect_save().returning(|_| Ok(()));

        let result = use_case(repos, true).execute(params()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_empty_cart() {
        let mut repos = happy_repos(Uuid::new_v4());
        repos.cart = MockCartRepo::new();
        repos
            .cart
            .expect_get()
            .returning(|session_id| Ok(Some(Cart::new(session_id.clone()))));
        repos.cart.expect_delete().never();

        let result = use_case(repos, true).execute(params()).await;

        assert!(matches!(result.unwrap_err(), OrderError::EmptyCart));
    }

    #[tokio::test]
    async fn should_reject_missing_profile() {
        let mut repos = happy_repos(Uuid::new_v4());
        repos.profile = MockProfileRepo::new();
        repos.profile.expect_get().returning(|_| Ok(None));

        let result = use_case(repos, true).execute(params()).await;

        assert!(matches!(result.unwrap_err(), OrderError::MissingProfile));
    }

    #[tokio::test]
    async fn should_reject_invalid_stored_profile() {
        let mut repos = happy_repos(Uuid::new_v4());
        repos.profile = MockProfileRepo::new();
        repos.profile.expect_get().returning(|session_id| {
            let mut stored = profile(session_id);
            stored.address = String::new();
            Ok(Some(stored))
        });

        let result = use_case(repos, true).execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::InvalidProfile(ProfileError::AddressEmpty)
        ));
    }

    #[tokio::test]
    async fn should_reject_items_no_longer_available() {
        let product_id = Uuid::new_v4();
        let mut repos = happy_repos(product_id);
        repos.product = MockProductRepo::new();
        repos
            .product
            .expect_get_by_id()
            .returning(|id| Ok(product(id, false)));
        repos.order.expect_save().never();
        repos.cart = MockCartRepo::new();
        repos
            .cart
            .expect_get()
            .returning(move |session_id| Ok(Some(cart(session_id, product_id))));
        repos.cart.expect_delete().never();

        let result = use_case(repos, true).execute(params()).await;

        match result.unwrap_err() {
            OrderError::ItemUnavailable(name) => assert_eq!(name, "X-Tudo"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
