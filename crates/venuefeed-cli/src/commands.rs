//! Command handlers for the CLI.
//!
//! Each handler builds a pipeline from config, runs one load, and prints the
//! published view model. Feed failures never abort a command; they show up
//! as a degraded header line instead.

use std::sync::Arc;

use venuefeed_core::{AppConfig, Position, Venue, VenueStatus};
use venuefeed_feed::FeedClient;
use venuefeed_pipeline::{map_markers, Condition, MapMarker, Pipeline, PipelineState, ViewModel};
use venuefeed_store::{CacheStore, FileKeyValueStore, KeyValueStore, StatusStore};

/// Combine `--lat` / `--lon` into a position.
///
/// # Errors
///
/// Returns an error if only one of the two is given or a value is out of range.
pub(crate) fn position_from_args(
    lat: Option<f64>,
    lon: Option<f64>,
) -> anyhow::Result<Option<Position>> {
    match (lat, lon) {
        (None, None) => Ok(None),
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                anyhow::bail!("position ({lat}, {lon}) is out of range");
            }
            Ok(Some(Position::new(lat, lon)))
        }
        _ => anyhow::bail!("--lat and --lon must be given together"),
    }
}

fn build_pipeline(config: &AppConfig) -> anyhow::Result<Pipeline<FeedClient>> {
    let client = FeedClient::new(&config.feed_url, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build feed client: {e}"))?;
    let kv: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(&config.data_dir));

    Ok(Pipeline::new(
        client,
        CacheStore::new(Arc::clone(&kv)),
        StatusStore::new(kv),
    ))
}

async fn load_with_position(
    config: &AppConfig,
    position: Option<Position>,
) -> anyhow::Result<(Pipeline<FeedClient>, Arc<ViewModel>)> {
    let pipeline = build_pipeline(config)?;
    if let Some(position) = position {
        pipeline.update_position(position).await;
    }
    let view_model = pipeline.load().await;
    Ok((pipeline, view_model))
}

pub(crate) async fn run_list(config: &AppConfig, position: Option<Position>) -> anyhow::Result<()> {
    let (_, view_model) = load_with_position(config, position).await?;

    println!("{}", describe_state(&view_model));
    for (idx, venue) in view_model.venues.iter().enumerate() {
        println!(
            "{:>3}. {} {} ({}) {}",
            idx + 1,
            status_marker(venue.status),
            venue.name,
            venue.building,
            format_distance(venue.distance_meters),
        );
    }
    Ok(())
}

pub(crate) async fn run_show(
    config: &AppConfig,
    position: Option<Position>,
    name: &str,
) -> anyhow::Result<()> {
    let (pipeline, view_model) = load_with_position(config, position).await?;
    let venue = pipeline.selected_venue(name).ok_or_else(|| {
        anyhow::anyhow!(
            "venue '{name}' not found ({} venues available)",
            view_model.venues.len()
        )
    })?;

    print_venue(&venue);
    Ok(())
}

pub(crate) async fn run_toggle(
    config: &AppConfig,
    position: Option<Position>,
    name: &str,
) -> anyhow::Result<()> {
    let (pipeline, _) = load_with_position(config, position).await?;
    if pipeline.selected_venue(name).is_none() {
        tracing::warn!(venue = name, "venue is not in the current list; status kept anyway");
    }

    let status = pipeline.toggle_status(name).await;
    println!("{name}: {status}");
    Ok(())
}

pub(crate) async fn run_markers(
    config: &AppConfig,
    position: Option<Position>,
) -> anyhow::Result<()> {
    let (_, view_model) = load_with_position(config, position).await?;

    for marker in map_markers(&view_model.venues) {
        println!("{}", marker_line(&marker));
    }
    Ok(())
}

pub(crate) fn marker_line(marker: &MapMarker<'_>) -> String {
    format!(
        "{:.6},{:.6}\t{}\t{}",
        marker.coordinates.latitude, marker.coordinates.longitude, marker.status, marker.name
    )
}

fn print_venue(venue: &Venue) {
    println!("{} [{}]", venue.name, venue.status);
    println!("  building: {}", venue.building);
    println!("  distance: {}", format_distance(venue.distance_meters));
    if !venue.description.is_empty() {
        println!("  {}", venue.description);
    }
    if !venue.opening_times.is_empty() {
        println!("  opening times:");
        for line in &venue.opening_times {
            println!("    {line}");
        }
    }
    if let Some(amenities) = venue.amenities.as_ref().filter(|a| !a.is_empty()) {
        println!("  amenities: {}", amenities.join(", "));
    }
    if let Some(photos) = venue.photos.as_ref().filter(|p| !p.is_empty()) {
        println!("  photos: {}", photos.join(", "));
    }
    if let Some(website) = &venue.website {
        println!("  website: {website}");
    }
}

pub(crate) fn describe_state(view_model: &ViewModel) -> String {
    let count = view_model.venues.len();
    match (view_model.state, view_model.condition) {
        (_, Some(Condition::ServedFromCache { cause })) => {
            format!("offline ({cause}): showing {count} cached venues")
        }
        (_, Some(Condition::NoDataAvailable { cause })) => {
            format!("offline ({cause}): no venue data available")
        }
        (PipelineState::Ready, None) => format!("{count} venues"),
        (state, None) => format!("{state:?}: {count} venues"),
    }
}

pub(crate) fn format_distance(distance_meters: Option<f64>) -> String {
    match distance_meters {
        None => "-".to_string(),
        Some(m) if m < 1_000.0 => format!("{m:.0} m"),
        Some(m) => format!("{:.1} km", m / 1_000.0),
    }
}

pub(crate) fn status_marker(status: VenueStatus) -> &'static str {
    match status {
        VenueStatus::Normal => " ",
        VenueStatus::Favorite => "*",
        VenueStatus::Disliked => "x",
    }
}
