//! Shared fixtures for the app's unit tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mylisting_assist::{AssistConfig, AssistError, AssistResult, TextGenerator};
use serde_json::{json, Value};

use crate::state::{AppConfig, Session};

/// Fake generator that answers every prompt the same way and records
/// what it was asked.
pub struct Scripted {
    answer: Result<String, fn() -> AssistError>,
    delay: Option<Duration>,
    pub prompts: Mutex<Vec<String>>,
}

impl Scripted {
    pub fn ok(text: &str) -> Arc<Self> {
        Arc::new(Scripted {
            answer: Ok(text.to_string()),
            delay: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Answers with `text` once `delay` has passed.
    pub fn ok_after(text: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Scripted {
            answer: Ok(text.to_string()),
            delay: Some(delay),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(err: fn() -> AssistError) -> Arc<Self> {
        Arc::new(Scripted {
            answer: Err(err),
            delay: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for Scripted {
    async fn generate(&self, prompt: &str, _model: &str) -> AssistResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.answer {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}

pub fn listing_json(id: &str, title: &str, listing_type: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "type": listing_type,
        "category": "Test",
        "description": "A place.",
        "rating": 4.5,
        "reviewsCount": 10,
        "imageUrl": "https://img/x.jpg",
        "location": { "address": "Rua A, 1", "city": "São Paulo", "lat": -23.5, "lng": -46.6 },
        "featured": false,
        "status": "open",
        "tags": []
    })
}

/// Session over a fake generator, seeded with three listings.
pub fn session_with(generator: Arc<Scripted>) -> Session {
    let session = Session::start(&AppConfig::default(), &AssistConfig::default(), generator)
        .unwrap();

    let mut bistro = listing_json("1", "Blue Ocean Bistro", "Restaurant");
    bistro["featured"] = json!(true);
    bistro["location"]["city"] = json!("Rio de Janeiro");
    bistro["tags"] = json!(["seafood", "view"]);

    let mut hotel = listing_json("2", "Grand Hotel Sol", "Hotel");
    hotel["status"] = json!("closed");

    let pizza = listing_json("3", "Pizzaria Napoli", "Restaurant");

    let listings = serde_json::from_value(json!([bistro, hotel, pizza])).unwrap();
    session.catalog.replace(listings);
    session
}
