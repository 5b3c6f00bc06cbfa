// Canned copy generator. A keyword table stands in for a language model.

struct Rule {
    keywords: &'static [&'static str],
    description: &'static str, // {item} and {style} are substituted
    upsell: &'static str,
}

// First match wins
const RULES: &[Rule] = &[
    Rule {
        keywords: &["paneer", "tikka"],
        description: "Smoky, spiced {item} with charred edges and creamy notes, crafted with {style} flair.",
        upsell: "Pair it with a chilled Mango Lassi.",
    },
    Rule {
        keywords: &["pizza"],
        description: "Hand-tossed {item} with bubbling cheese and vibrant toppings, baked with {style} flair for a perfect bite.",
        upsell: "Pair it with garlic breadsticks.",
    },
    Rule {
        keywords: &["burger"],
        description: "Juicy {item} stacked with crisp veggies and a soft bun, delivering bold, satisfying flavor with {style} flair.",
        upsell: "Pair it with crispy fries.",
    },
    Rule {
        keywords: &["biryani"],
        description: "Aromatic {item} with layered spices and tender grains, finished with fragrant herbs and {style} flair.",
        upsell: "Pair it with raita.",
    },
];

const FALLBACK: Rule = Rule {
    keywords: &[],
    description: "Tasty {item} made with quality ingredients and balanced flavors, served with {style} flair for quick cravings.",
    upsell: "Pair it with a refreshing iced tea.",
};

pub const DEFAULT_MODEL_HINT: &str = "gpt-3.5";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCopy {
    pub description: String,
    pub upsell: String,
}

pub fn style_for(model_hint: &str) -> &'static str {
    if model_hint.contains('4') {
        "elegant"
    } else {
        "lively"
    }
}

/// Builds a description and upsell line for an already validated item name.
pub fn generate(item: &str, model_hint: &str) -> ItemCopy {
    let core = item.to_lowercase();
    let style = style_for(model_hint);

    let rule = RULES
        .iter()
        .find(|r| r.keywords.iter().any(|k| core.contains(k)))
        .unwrap_or(&FALLBACK);

    ItemCopy {
        description: rule
            .description
            .replace("{item}", item)
            .replace("{style}", style),
        upsell: rule.upsell.to_string(),
    }
}
