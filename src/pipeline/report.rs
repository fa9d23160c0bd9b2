// Song report
// Combined flow, lyric quality and hit potential analysis for one lyric sheet

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::AnalysisSettings;
use crate::flow::{analyze_flow, analyze_singability, match_to_beat, BeatAlignment, FlowAnalysis};
use crate::genres::get_genre_rules;
use crate::hit::{analyze_hit_potential, HitPotentialScore};
use crate::lyrics::{analyze_lyrics, LyricScore};
use crate::pipeline::trace::{TraceBuilder, TraceEntry};
use crate::sections::{parse_sections, section_outline, TagVocabulary};

/// How the resolved tempo sits against one selected genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreFit {
    /// Table key of the matched genre
    pub genre: String,
    pub ideal_bpm: u32,
    pub in_range: bool,
}

/// Display labels for the headline scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportHeadline {
    pub flow_rating: String,
    pub lyric_grade: String,
    pub hit_verdict: String,
}

/// Everything the analyzers say about one lyric sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongReport {
    /// Tempo every analyzer was run at
    pub bpm: f64,
    pub duration_seconds: f64,
    /// Section labels in order, e.g. ["Verse", "Chorus"]
    pub section_outline: Vec<String>,
    pub flow: FlowAnalysis,
    pub beat_alignment: BeatAlignment,
    pub singability: u32,
    pub lyrics: LyricScore,
    pub hit_potential: HitPotentialScore,
    /// Selected genres that resolved, in selection order
    pub genre_fit: Vec<GenreFit>,
    pub headline: ReportHeadline,
    pub trace: Vec<TraceEntry>,
}

/// Run every analyzer on the same lyrics.
///
/// The analyzers do not see each other's output; the report only collects
/// them. Settings are assumed validated.
pub fn analyze_song(lyrics: &str, settings: &AnalysisSettings) -> SongReport {
    let bpm = settings.resolved_bpm();
    let duration_seconds = settings.duration_seconds;
    let mut trace = Vec::new();

    log::info!(
        "Analyzing song: {} chars at {} BPM over {}s",
        lyrics.len(),
        bpm,
        duration_seconds
    );
    trace.push(TraceBuilder::stage("report").start(format!("Analyzing at {} BPM", bpm)));

    let sections = parse_sections(lyrics, &TagVocabulary::standard());
    let outline = section_outline(&sections);
    trace.push(TraceBuilder::stage("sections").with_data(
        0.15,
        format!("Found {} sections", sections.len()),
        json!({ "outline": outline }),
    ));

    let flow = analyze_flow(lyrics, bpm);
    let beat_alignment = match_to_beat(lyrics, bpm);
    trace.push(TraceBuilder::stage("flow").with_data(
        0.35,
        format!("Flow rated {}", flow.rating().label()),
        json!({ "flowScore": flow.flow_score, "rhymeScheme": flow.rhyme_scheme }),
    ));

    let singability = analyze_singability(lyrics);
    trace.push(TraceBuilder::stage("singability").with_data(
        0.5,
        "Singability scored",
        json!({ "singability": singability }),
    ));

    let lyric_score = analyze_lyrics(lyrics);
    trace.push(TraceBuilder::stage("lyrics").with_data(
        0.7,
        format!("Lyrics graded {}", lyric_score.grade().label()),
        json!({ "overall": lyric_score.overall }),
    ));

    let hit_potential = analyze_hit_potential(lyrics, bpm, duration_seconds);
    trace.push(TraceBuilder::stage("hit_potential").with_data(
        0.9,
        format!("Hit potential {}", hit_potential.verdict().label()),
        json!({ "overall": hit_potential.overall }),
    ));

    let genre_fit = genre_fit(&settings.genres, bpm);
    trace.push(TraceBuilder::stage("genres").progress(
        0.95,
        format!(
            "Matched {} of {} selected genres",
            genre_fit.len(),
            settings.genres.len()
        ),
    ));

    let headline = ReportHeadline {
        flow_rating: flow.rating().label().to_string(),
        lyric_grade: lyric_score.grade().label().to_string(),
        hit_verdict: hit_potential.verdict().label().to_string(),
    };
    trace.push(TraceBuilder::stage("report").complete("Analysis complete"));
    log::info!(
        "Song analysis complete: flow {}, lyrics {}, hit {}",
        flow.flow_score,
        lyric_score.overall,
        hit_potential.overall
    );

    SongReport {
        bpm,
        duration_seconds,
        section_outline: outline,
        flow,
        beat_alignment,
        singability,
        lyrics: lyric_score,
        hit_potential,
        genre_fit,
        headline,
        trace,
    }
}

fn genre_fit(genres: &[String], bpm: f64) -> Vec<GenreFit> {
    genres
        .iter()
        .filter_map(|name| {
            let rule = get_genre_rules(name);
            if rule.is_none() {
                log::warn!("Unknown genre '{}' left out of the report", name);
            }
            rule
        })
        .map(|rule| GenreFit {
            genre: rule.key.clone(),
            ideal_bpm: rule.ideal_bpm,
            in_range: rule.bpm_in_range(bpm),
        })
        .collect()
}
