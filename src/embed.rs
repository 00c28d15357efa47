use crate::cards::Card;

/// A titled, coloured card of text, the unit every reply and
/// announcement is made of. Transport-neutral: whatever posts it decides
/// how it looks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Embed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<(String, String)>,
    pub color: u32,
    /// cards a renderer may draw alongside the text
    pub cards: Vec<Card>,
    pub footer: Option<String>,
}

impl Embed {
    pub fn new(color: u32) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
    pub fn cards(mut self, cards: &[Card]) -> Self {
        self.cards = cards.to_vec();
        self
    }
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

impl std::fmt::Display for Embed {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "== {} ==", title)?;
        }
        if let Some(description) = &self.description {
            writeln!(f, "{}", description)?;
        }
        for (name, value) in &self.fields {
            writeln!(f, "{}: {}", name, value)?;
        }
        if let Some(footer) = &self.footer {
            writeln!(f, "({})", footer)?;
        }
        Ok(())
    }
}

/// What a command answers with.
///
/// Multi-embed replies are pages the user flips through, first page
/// shown first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
    /// visible only to the invoking user
    pub ephemeral: bool,
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
    pub fn embed(embed: Embed) -> Self {
        Self::pages(vec![embed])
    }
    pub fn pages(embeds: Vec<Embed>) -> Self {
        Self {
            embeds,
            ..Self::default()
        }
    }
    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(content) = &self.content {
            writeln!(f, "{}", content)?;
        }
        for embed in &self.embeds {
            write!(f, "{}", embed)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_plain_text() {
        let embed = Embed::new(crate::RED)
            .title("Day 3 | Turn Draw")
            .description("Turn: 7♣")
            .footer("Page 1/1");
        assert_eq!(
            embed.to_string(),
            "== Day 3 | Turn Draw ==\nTurn: 7♣\n(Page 1/1)\n"
        );
    }

    #[test]
    fn text_reply_has_no_embeds() {
        let reply = Reply::text("Pong!");
        assert_eq!(reply.to_string(), "Pong!\n");
        assert!(reply.embeds.is_empty());
        assert!(!reply.ephemeral);
        assert!(reply.ephemeral().ephemeral);
    }
}
