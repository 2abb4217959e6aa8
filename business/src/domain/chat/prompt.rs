use crate::domain::product::model::Product;

/// System prompt for the ordering assistant, listing the catalog items that
/// matched the customer's message so the model quotes real names and prices.
pub fn build_system_prompt(restaurant_name: &str, products: &[Product]) -> String {
    let mut prompt = format!(
        r#"Você é o atendente virtual do restaurante {name}.
Responda sempre em português do Brasil, de forma curta, simpática e objetiva.

Regras:
- Só recomende itens que aparecem em CARDÁPIO RELACIONADO abaixo.
- Use exatamente os nomes e preços listados; nunca invente preços.
- Se o cliente quiser pedir, oriente a adicionar os itens ao carrinho e finalizar pelo botão de checkout.
- Se não souber a resposta, diga que vai verificar com a equipe.
- Não peça dados de pagamento no chat."#,
        name = restaurant_name
    );

    prompt.push_str("\n\nCARDÁPIO RELACIONADO:\n");
    if products.is_empty() {
        prompt.push_str("(nenhum item encontrado para esta mensagem)");
        return prompt;
    }

    let lines: Vec<String> = products
        .iter()
        .map(|p| {
            let price = if p.has_active_promo() {
                format!("{} (promoção, antes {})", p.effective_price(), p.price)
            } else {
                p.price.to_string()
            };
            match &p.description {
                Some(description) => {
                    format!("- {} [{}]: {}. {}", p.name, p.category, price, description)
                }
                None => format!("- {} [{}]: {}", p.name, p.category, price),
            }
        })
        .collect();
    prompt.push_str(&lines.join("\n"));
    prompt
}
