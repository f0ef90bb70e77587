//! Shared builders for unit tests.

use crate::item::{Category, Condition, Item, Size, UserSummary};

pub fn user(id: &str, name: &str) -> UserSummary {
    UserSummary {
        id: id.to_string(),
        name: name.to_string(),
        avatar: String::new(),
    }
}

/// A medium top with the given id, price and upload time.
pub fn item(id: &str, wear_coins: u32, uploaded_at: &str) -> Item {
    Item {
        id: id.to_string(),
        title: format!("Item {id}"),
        description: "Test garment".to_string(),
        category: Category::Tops,
        garment_type: None,
        size: Size::M,
        condition: Condition::Good,
        wear_coins,
        tags: Vec::new(),
        images: vec![format!("/images/{id}.svg")],
        uploader: user("user_2", "Alex Kim"),
        is_available: true,
        uploaded_at: uploaded_at.parse().expect("valid RFC 3339 timestamp"),
        likes: 0,
    }
}

/// The four launch listings.
pub fn sample_catalog() -> Vec<Item> {
    let mut jacket = item("item_1", 25, "2024-01-15T10:30:00Z");
    jacket.title = "Vintage Levi's Denim Jacket".into();
    jacket.description =
        "Classic 90s denim jacket in excellent condition. Perfect for layering and street style looks."
            .into();
    jacket.category = Category::Outerwear;
    jacket.garment_type = Some("Jacket".into());
    jacket.condition = Condition::Excellent;
    jacket.tags = vec!["vintage".into(), "denim".into(), "90s".into(), "streetwear".into()];
    jacket.likes = 12;

    let mut dress = item("item_2", 35, "2024-01-14T14:20:00Z");
    dress.title = "Silk Midi Dress".into();
    dress.description =
        "Elegant silk dress perfect for special occasions. Barely worn, like new condition.".into();
    dress.category = Category::Dresses;
    dress.garment_type = Some("Midi Dress".into());
    dress.size = Size::S;
    dress.condition = Condition::LikeNew;
    dress.tags = vec!["silk".into(), "elegant".into(), "formal".into(), "midi".into()];
    dress.uploader = user("user_3", "Emma Wilson");
    dress.likes = 8;

    let mut sneakers = item("item_3", 20, "2024-01-13T09:15:00Z");
    sneakers.title = "Sneakers Nike Air".into();
    sneakers.description =
        "Limited edition Nike Air sneakers. Great for casual wear and workouts.".into();
    sneakers.category = Category::Shoes;
    sneakers.garment_type = Some("Sneakers".into());
    sneakers.size = Size::Shoe(42);
    sneakers.tags = vec!["nike".into(), "sneakers".into(), "sports".into(), "limited".into()];
    sneakers.uploader = user("user_1", "Sarah Chen");
    sneakers.likes = 15;

    let mut sweater = item("item_4", 30, "2024-01-12T16:45:00Z");
    sweater.title = "Cashmere Sweater".into();
    sweater.description = "Luxurious cashmere sweater in cream color. Super soft and warm.".into();
    sweater.garment_type = Some("Sweater".into());
    sweater.size = Size::L;
    sweater.condition = Condition::Excellent;
    sweater.tags = vec!["cashmere".into(), "luxury".into(), "warm".into(), "winter".into()];
    sweater.uploader = user("user_4", "Maria Garcia");
    sweater.is_available = false;
    sweater.likes = 5;

    vec![jacket, dress, sneakers, sweater]
}
