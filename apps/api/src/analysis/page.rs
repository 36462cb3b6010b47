//! HTML page for the form front end. Rendered with askama (auto-escaped).

use askama::Template;

use crate::analysis::scorer::AnalysisResult;

/// One bar in the trait chart.
#[derive(Debug, Clone)]
pub struct TraitRow {
    pub name: String,
    pub score: String,
    pub width: String,
}

/// Pre-formatted view of an `AnalysisResult`.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub traits: Vec<TraitRow>,
    pub top_traits: String,
    pub avg_sentiment: String,
    pub avg_word_count: String,
    pub avg_popularity: String,
    pub item_count: usize,
    pub careers: Vec<String>,
}

impl From<&AnalysisResult> for ResultView {
    fn from(result: &AnalysisResult) -> Self {
        let traits = result
            .trait_profile
            .iter()
            .map(|(t, score)| TraitRow {
                name: capitalize(t.as_str()),
                score: format!("{score:.1}"),
                width: format!("{score:.0}"),
            })
            .collect();

        let top_traits = result
            .top_traits
            .iter()
            .map(|t| capitalize(t.as_str()))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            traits,
            top_traits,
            avg_sentiment: format!("{:.3}", result.avg_sentiment),
            avg_word_count: format!("{:.1}", result.avg_word_count),
            avg_popularity: format!("{:.1}", result.avg_popularity),
            item_count: result.item_count,
            careers: result.recommended_careers.clone(),
        }
    }
}

/// The single page: form, then either a result or an error, never both.
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>TraitLens - Reddit Personality Analysis</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 760px; margin: 0 auto; padding: 24px; color: #333; background: #f8f9fa; }
        .card { background: #fff; border-radius: 8px; padding: 20px; margin-top: 20px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
        .bar { background: #e9ecef; border-radius: 4px; height: 14px; }
        .fill { background: #ff4500; border-radius: 4px; height: 14px; }
        .error { color: #b00020; }
        table { width: 100%; border-collapse: collapse; }
        td { padding: 6px 4px; }
    </style>
</head>
<body>
    <h1>TraitLens</h1>
    <p>Estimate a Reddit user's personality traits from their recent posts and comments.</p>
    <form method="post" action="/">
        <input type="text" name="username" placeholder="Reddit username" value="{{ username }}" required>
        <button type="submit">Analyze</button>
    </form>
    {% if let Some(message) = error %}
    <div class="card error">
        <strong>Error:</strong> {{ message }}
    </div>
    {% endif %}
    {% if let Some(view) = result %}
    <div class="card">
        <h2>Personality traits</h2>
        <table>
            {% for row in view.traits %}
            <tr>
                <td>{{ row.name }}</td>
                <td style="width: 60%"><div class="bar"><div class="fill" style="width: {{ row.width }}%"></div></div></td>
                <td>{{ row.score }}</td>
            </tr>
            {% endfor %}
        </table>
        <p><strong>Top traits:</strong> {{ view.top_traits }}</p>
    </div>
    <div class="card">
        <h2>Activity</h2>
        <p><strong>Items analyzed:</strong> {{ view.item_count }}</p>
        <p><strong>Average sentiment:</strong> {{ view.avg_sentiment }}</p>
        <p><strong>Average words per item:</strong> {{ view.avg_word_count }}</p>
        <p><strong>Average score:</strong> {{ view.avg_popularity }}</p>
    </div>
    <div class="card">
        <h2>Career suggestions</h2>
        <ul>
            {% for career in view.careers %}
            <li>{{ career }}</li>
            {% endfor %}
        </ul>
    </div>
    {% endif %}
</body>
</html>"#,
    ext = "html"
)]
pub struct IndexPage {
    pub username: String,
    pub result: Option<ResultView>,
    pub error: Option<String>,
}

impl IndexPage {
    pub fn empty() -> Self {
        Self {
            username: String::new(),
            result: None,
            error: None,
        }
    }

    pub fn with_result(username: String, result: &AnalysisResult) -> Self {
        Self {
            username,
            result: Some(ResultView::from(result)),
            error: None,
        }
    }

    pub fn with_error(username: String, message: String) -> Self {
        Self {
            username,
            result: None,
            error: Some(message),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
