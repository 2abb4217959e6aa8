use crate::domain::payment::model::PaymentProvider;

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Pix,
    Cash,
    CardOnDelivery,
    Online(PaymentProvider),
}

impl PaymentMethod {
    /// Label printed on the WhatsApp message.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::CardOnDelivery => "Cartão na entrega",
            PaymentMethod::Online(provider) => provider.label(),
        }
    }

    pub fn provider(&self) -> Option<PaymentProvider> {
        match self {
            PaymentMethod::Online(provider) => Some(*provider),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Pix => write!(f, "pix"),
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::CardOnDelivery => write!(f, "card_on_delivery"),
            PaymentMethod::Online(provider) => write!(f, "{}", provider),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pix" => Ok(PaymentMethod::Pix),
            "cash" => Ok(PaymentMethod::Cash),
            "card_on_delivery" => Ok(PaymentMethod::CardOnDelivery),
            other => other
                .parse::<PaymentProvider>()
                .map(PaymentMethod::Online)
                .map_err(|_| format!("Invalid payment method: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    AwaitingPayment,
    Paid,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::AwaitingPayment => write!(f, "awaiting_payment"),
            OrderStatus::Paid => write!(f, "paid"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "awaiting_payment" => Ok(OrderStatus::AwaitingPayment),
            "paid" => Ok(OrderStatus::Paid),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}
