// src/bin/seed.rs
// DOCUMENTATION: Load sample advertisements into a running server
// PURPOSE: Exercise the HTTP API end to end and give local environments some data
//
// Usage: seed [path/to/advertisements.json]
// The base URL is read from ADS_API_URL (default http://localhost:8000).

use advertisements_api::models::{AdvertisementResponse, CreateAdvertisementRequest};
use anyhow::{bail, Context};
use dotenv::dotenv;
use reqwest::{Client, StatusCode};
use std::env;
use std::process;
use std::time::{Duration, Instant};

const DEFAULT_API_URL: &str = "http://localhost:8000";

fn sample_advertisements() -> Vec<CreateAdvertisementRequest> {
    let samples = [
        (
            "Selling a bicycle",
            "Clean frame, excellent condition, new tyres",
            15000.0,
            "Ivan Ivanov",
        ),
        (
            "Wooden dining table",
            "Solid oak, seats six, minor scratches",
            8200.0,
            "Maria Petrova",
        ),
        (
            "Guitar lessons",
            "Beginner and intermediate, first lesson free",
            0.0,
            "Alexei Smirnov",
        ),
        (
            "Winter tyres R16",
            "Set of four, two seasons used",
            12500.0,
            "Ivan Ivanov",
        ),
    ];

    samples
        .iter()
        .map(|(title, description, price, author)| CreateAdvertisementRequest {
            title: title.to_string(),
            description: description.to_string(),
            price: *price,
            author: author.to_string(),
        })
        .collect()
}

fn load_advertisements(path: Option<String>) -> anyhow::Result<Vec<CreateAdvertisementRequest>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path))?;
            serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path))
        }
        None => Ok(sample_advertisements()),
    }
}

async fn check_health(client: &Client, base_url: &str) -> anyhow::Result<()> {
    let response = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .with_context(|| format!("server not reachable at {}", base_url))?;

    if !response.status().is_success() {
        bail!("health check failed with status {}", response.status());
    }
    Ok(())
}

async fn create_advertisement(
    client: &Client,
    base_url: &str,
    ad: &CreateAdvertisementRequest,
) -> anyhow::Result<AdvertisementResponse> {
    let response = client
        .post(format!("{}/advertisement", base_url))
        .json(ad)
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::CREATED {
        let body = response.text().await.unwrap_or_default();
        bail!("unexpected status {}: {}", status, body);
    }

    Ok(response.json::<AdvertisementResponse>().await?)
}

async fn run() -> anyhow::Result<usize> {
    let base_url = env::var("ADS_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string();

    let ads = load_advertisements(env::args().nth(1))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .context("failed to build HTTP client")?;

    check_health(&client, &base_url).await?;
    log::info!("Seeding {} advertisements into {}", ads.len(), base_url);

    let started = Instant::now();
    let mut failed = 0;

    for ad in &ads {
        match create_advertisement(&client, &base_url, ad).await {
            Ok(created) => {
                println!("created {}  {:<28} {:>10.2}", created.id, created.title, created.price)
            }
            Err(e) => {
                failed += 1;
                log::error!("Failed to create '{}': {}", ad.title, e);
            }
        }
    }

    println!(
        "\n{} created, {} failed in {:.2}s",
        ads.len() - failed,
        failed,
        started.elapsed().as_secs_f64()
    );

    Ok(failed)
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            log::error!("{:#}", e);
            process::exit(1);
        }
    }
}
