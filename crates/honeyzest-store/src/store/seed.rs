//! # Starter Data
//!
//! What a fresh storefront opens with: three products, three accounts, one
//! blog post, two historical orders, the shop's contact details and legal
//! copy, and a welcome notification.
//!
//! Every seeded account signs in with the password `123`.

use chrono::NaiveDate;
use honeyzest_core::{
    AboutInfo, Blog, Category, Comment, CommentId, ContactInfo, Faq, FaqId, LegalInfo, Money,
    Order, OrderId, OrderLine, OrderStatus, Product, Review, ReviewId, Role, SiteContent, User,
};
use tracing::debug;

use super::Store;

const SEED_PASSWORD: &str = "123";

/// (name, email, role)
const USERS: &[(&str, &str, Role)] = &[
    ("Admin User", "admin@honeyzest.com", Role::Admin),
    ("John Doe", "john@gmail.com", Role::Member),
    ("Sarah Smith", "sarah@gmail.com", Role::Member),
];

/// (name, price in KES, description, unsplash photo, category)
const PRODUCTS: &[(&str, i64, &str, &str, Category)] = &[
    (
        "Acacia Gold",
        800,
        "Pure Acacia honey from Baringo.",
        "photo-1587049352846-4a222e784d38",
        Category::Raw,
    ),
    (
        "Highland Cream",
        1200,
        "Creamed honey from Eldoret highlands.",
        "photo-1587049352851-8d4e8918dcf1",
        Category::Creamed,
    ),
    (
        "Comb Chunk",
        1500,
        "Raw honey with comb inside.",
        "photo-1471943311424-646960669fbc",
        Category::Raw,
    ),
];

/// (question, answer)
const FAQS: &[(&str, &str)] = &[
    (
        "Where is HoneyZest located?",
        "We are based in Eldoret, Kenya at Barng'etuny Plaza, Room 25.",
    ),
    (
        "Do you offer delivery?",
        "We arrange direct deliveries or parcel services upon payment.",
    ),
    (
        "Is the honey 100% organic?",
        "Yes! Our honey is sourced directly from local farmers in the Rift Valley.",
    ),
];

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&w=500&q=80")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Store {
    /// Loads the starter data into an empty store.
    pub(super) fn seed(&mut self) {
        for (name, email, role) in USERS {
            let id = self.ids.user();
            self.users.push(User {
                id,
                name: name.to_string(),
                email: email.to_string(),
                password: SEED_PASSWORD.to_string(),
                role: *role,
            });
        }

        for (name, shillings, description, photo, category) in PRODUCTS {
            let id = self.ids.product();
            self.products.push(Product {
                id,
                name: name.to_string(),
                price: Money::from_shillings(*shillings),
                description: description.to_string(),
                image: unsplash(photo),
                category: *category,
                reviews: Vec::new(),
            });
        }
        if let Some(acacia) = self.products.first_mut() {
            acacia.reviews.push(Review {
                id: ReviewId::new(),
                user: "Jane D.".to_string(),
                rating: 5,
                text: "Best honey I've ever tasted!".to_string(),
            });
        }

        let blog_id = self.ids.blog();
        self.blogs.push(Blog {
            id: blog_id,
            title: "Health Benefits".to_string(),
            content: "Raw honey is amazing...".to_string(),
            image: unsplash("photo-1558642452-9d2a7deb7f62"),
            date: date(2023, 10, 15),
            comments: vec![Comment {
                id: CommentId::new(),
                text: "Great read!".to_string(),
            }],
        });

        self.seed_orders();

        self.content = SiteContent {
            contact: ContactInfo {
                phone: "+254 716 490 014".to_string(),
                email: "honeyzest@gmail.com".to_string(),
                address: "Barng'etuny Plaza, Room 25, Eldoret".to_string(),
                whatsapp: "254716490014".to_string(),
            },
            about: AboutInfo {
                title: "Pure. Natural. Golden.".to_string(),
                content: "HoneyZest is dedicated to bringing you the finest organic honey."
                    .to_string(),
            },
            legal: LegalInfo {
                faqs: FAQS
                    .iter()
                    .map(|(question, answer)| Faq {
                        id: FaqId::new(),
                        question: question.to_string(),
                        answer: answer.to_string(),
                    })
                    .collect(),
                privacy: "At HoneyZest, we value your privacy. We collect basic info for order processing only."
                    .to_string(),
                terms: "By accessing HoneyZest, you agree to our terms. Honey is a natural product and may crystallize."
                    .to_string(),
            },
        };

        self.add_notification("Welcome to HoneyZest! 🐝");

        debug!(
            users = self.users.len(),
            products = self.products.len(),
            orders = self.orders.len(),
            "Store seeded"
        );
    }

    /// Historical orders, newest first. Their ids predate the ORD-nnnn
    /// numbering and never collide with it.
    fn seed_orders(&mut self) {
        // (order id, customer email, product index, quantity, status, date)
        let history = [
            ("ORD-001", "john@gmail.com", 0, 3, OrderStatus::Pending, date(2023, 11, 20)),
            ("ORD-002", "sarah@gmail.com", 1, 1, OrderStatus::Delivered, date(2023, 11, 18)),
        ];

        for (order_id, email, product_index, quantity, status, placed) in history {
            let (Some(customer), Some(product)) = (
                self.users.iter().find(|u| u.email == email),
                self.products.get(product_index),
            ) else {
                continue;
            };

            let line = OrderLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.price,
                quantity,
            };
            let Ok(mut order) =
                Order::from_lines(OrderId::from(order_id), customer, vec![line], placed)
            else {
                continue;
            };
            order.status = status;
            self.orders.push(order);
        }
    }
}
