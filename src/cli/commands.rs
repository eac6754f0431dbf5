use crate::app::{AppContext, MinbarError, Result};
use crate::player::{PlaybackCoordinator, RodioSink};

pub async fn list_surahs(ctx: &AppContext, json: bool) -> Result<()> {
    ctx.catalog.load().await?;
    let state = ctx.catalog.state();

    if json {
        println!("{}", serde_json::to_string_pretty(&state.surahs)?);
        return Ok(());
    }

    for surah in &state.surahs {
        println!("{:>3}  {}  {}", surah.number, surah.name, surah.subtitle());
    }
    println!("{} surahs", state.surahs.len());
    Ok(())
}

pub async fn show_surah(ctx: &AppContext, number: u32) -> Result<()> {
    ctx.detail.load(number).await?;
    let state = ctx.detail.state();

    for ayah in &state.ayahs {
        println!("{:>3}  {}", ayah.id, ayah.text);
    }
    Ok(())
}

pub async fn show_news(ctx: &AppContext, open: Option<usize>) -> Result<()> {
    ctx.news.refresh().await?;
    let state = ctx.news.state();

    if let Some(index) = open {
        let item = index
            .checked_sub(1)
            .and_then(|i| state.items.get(i))
            .ok_or_else(|| MinbarError::ItemNotFound(format!("news item {}", index)))?;
        open::that(item.link.as_str())?;
        println!("Opened {}", item.link);
        return Ok(());
    }

    if state.items.is_empty() {
        println!("No news right now");
        return Ok(());
    }

    for (i, item) in state.items.iter().enumerate() {
        println!(
            "{:>3}  {}  {}",
            i + 1,
            item.published_at.format("%Y-%m-%d"),
            item.title
        );
        if !item.summary.is_empty() {
            println!("     {}", item.summary);
        }
    }
    Ok(())
}

pub async fn play_ayah(ctx: &AppContext, surah: u32, ayah: u32) -> Result<()> {
    ctx.detail.load(surah).await?;
    let state = ctx.detail.state();
    let verse = state
        .ayahs
        .iter()
        .find(|a| a.id == ayah)
        .ok_or_else(|| MinbarError::ItemNotFound(format!("ayah {} of surah {}", ayah, surah)))?;

    let mut player = PlaybackCoordinator::new(Box::new(RodioSink::new()));
    player.play(verse.id, &verse.audio).await?;
    println!("Playing surah {} ayah {}", surah, verse.id);

    let poll_interval = ctx.config.playback.poll_interval();
    while player.state().is_playing {
        tokio::time::sleep(poll_interval).await;
        player.poll();
    }
    Ok(())
}
