use askama::Template;

use crate::view::{CandidateCard, Results, View};

/// Grey square shown in place of a cover that failed to load. It sits inside a
/// single-quoted JS string in `onerror`, so its quotes are percent-encoded.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns=%27http://www.w3.org/2000/svg%27 width=%27200%27 height=%27200%27%3E%3Crect fill=%27%23ddd%27 width=%27200%27 height=%27200%27/%3E%3Ctext x=%2750%25%27 y=%2750%25%27 text-anchor=%27middle%27 dy=%27.3em%27 fill=%27%23999%27%3ENo image%3C/text%3E%3C/svg%3E";

struct Preview<'a> {
    image_url: &'a str,
    url_field: &'a str,
}

/// Everything the lookup service sends ends up in `{{ }}` and is escaped;
/// only the constant placeholder is emitted raw
#[derive(Template)]
#[template(
    source = r#"<div class="thumbnail-widget">
  <input id="book-title" type="text" value="{{ view.query_input }}"{% if view.input_focused %} autofocus{% endif %}>
  {% if view.search_enabled -%}
  <button id="search-btn"><span class="btn-text">Search</span></button>
  {%- else -%}
  <button id="search-btn" disabled><span class="btn-loading">Searching...</span></button>
  {%- endif %}
  <button id="clear-btn">Clear</button>
  {% match view.error -%}
  {% when Some with (error) -%}
  <div id="error-message">{{ error }}</div>
  {%- when None -%}
  {%- endmatch %}
  {% match preview -%}
  {% when Some with (preview) -%}
  <div id="result-section">
    <img id="thumbnail-img" src="{{ preview.image_url }}" alt="" onerror="this.src='{{ placeholder|safe }}'">
    <input id="thumbnail-url" type="text" value="{{ preview.url_field }}">
    <button id="copy-btn">{{ view.copy_label }}</button>
  </div>
  {%- when None -%}
  {%- endmatch %}
  {% if !cards.is_empty() -%}
  <div id="result-section">
    <div class="candidates-container">
      <h3>Pick a cover</h3>
      {% for card in cards -%}
      <div class="candidate-card">
        <img src="{{ card.image_url }}" alt="{{ card.title }}" onerror="this.src='{{ placeholder|safe }}'">
        <div class="candidate-title">{{ card.title }}</div>
        <button class="select-button" data-index="{{ card.index }}">Use this cover</button>
      </div>
      {% endfor %}
    </div>
  </div>
  {%- endif %}
</div>
"#,
    ext = "html"
)]
struct WidgetTemplate<'a> {
    view: &'a View,
    preview: Option<Preview<'a>>,
    cards: &'a [CandidateCard],
    placeholder: &'static str,
}

/// Render the widget as an HTML fragment
pub fn render_html(view: &View) -> Result<String, askama::Error> {
    let (preview, cards) = match &view.results {
        Results::Hidden => (None, &[][..]),
        Results::Preview {
            image_url,
            url_field,
        } => (
            Some(Preview {
                image_url,
                url_field,
            }),
            &[][..],
        ),
        Results::Gallery(cards) => (None, cards.as_slice()),
    };

    WidgetTemplate {
        view,
        preview,
        cards,
        placeholder: PLACEHOLDER_IMAGE,
    }
    .render()
}
