// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTML and plain-text rendering of the query form.

use std::fmt::Write;

use crate::controller::{SearchController, SearchState};
use crate::models::{AlternateBuild, SearchResponse};

const STYLE: &str = r#"
body { font-family: "Roboto Mono", ui-monospace, monospace; background: #f9fafb; color: #1f2937; margin: 0; }
main { max-width: 36rem; margin: 0 auto; padding: 3rem 1.5rem; }
h1 { color: #2563eb; text-align: center; font-size: 2.25rem; }
form { display: flex; flex-direction: column; margin-bottom: 2rem; }
form div { display: flex; }
input { flex: 1; padding: 0.5rem 0.75rem; border: 1px solid #d1d5db; border-radius: 6px 0 0 6px; }
button { padding: 0.5rem 1rem; border: 0; border-radius: 0 6px 6px 0; background: #3b82f6; color: white; }
button:disabled, input:disabled { opacity: 0.5; }
.error { margin: 1rem 0; padding: 1rem; border: 1px solid #fca5a5; border-radius: 6px; background: #fee2e2; color: #b91c1c; }
.loading { text-align: center; color: #2563eb; }
ol { list-style: none; padding: 0; }
li { display: flex; gap: 1rem; margin-bottom: 1rem; padding: 1rem; border: 1px solid #d1d5db; border-radius: 8px; background: white; }
li img { width: 8rem; height: auto; border-radius: 6px; }
li h3 { margin: 0; }
a { color: #1d4ed8; }
"#;

/// Render the whole page for the controller's current state.
pub fn render_page(controller: &SearchController) -> String {
	let loading = controller.is_loading();
	let disabled = if loading { " disabled" } else { "" };
	let button = if loading { "Searching..." } else { "Search" };

	let mut html = format!(
		r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<meta name="description" content="Find alternate builds for your LEGO sets">
<title>MOC Finder</title>
<style>{STYLE}</style>
</head>
<body>
<main>
<h1>MOC Finder</h1>
<form method="get" action="/">
<label for="set_num">Enter LEGO Set Number:</label>
<div>
<input type="text" name="set_num" id="set_num" placeholder="e.g., 75192 or 10305" value="{value}"{disabled}>
<button type="submit"{disabled}>{button}</button>
</div>
</form>
"#,
		value = escape_html(controller.input()),
	);

	match controller.state() {
		SearchState::Idle => {}
		SearchState::Loading => {
			html.push_str("<div class=\"loading\"><p>Loading MOCs...</p></div>\n");
		}
		SearchState::Error(message) => {
			let _ = writeln!(
				html,
				r#"<div class="error"><p role="alert">Error: {}</p></div>"#,
				escape_html(message)
			);
		}
		SearchState::Success(response) => {
			render_results(&mut html, response, results_label(controller, response));
		}
	}

	html.push_str("</main>\n</body>\n</html>\n");
	html
}

fn render_results(html: &mut String, response: &SearchResponse, label: &str) {
	let _ = write!(
		html,
		r#"<section aria-labelledby="results-heading">
<h2 id="results-heading">Results for Set: <span>{}</span></h2>
<p class="count">Found {} alternate build(s).</p>
"#,
		escape_html(label),
		response.count
	);

	if response.count > 0 {
		html.push_str("<ol>\n");
		for build in &response.results {
			render_build(html, build);
		}
		html.push_str("</ol>\n");
	}

	html.push_str("</section>\n");
}

fn render_build(html: &mut String, build: &AlternateBuild) {
	let _ = write!(html, r#"<li data-key="{}">"#, escape_html(&build.set_num));
	if let Some(img) = &build.moc_img_url {
		let _ = write!(
			html,
			r#"<img src="{}" alt="Image of {}">"#,
			escape_html(img),
			escape_html(&build.name)
		);
	}
	let _ = writeln!(
		html,
		r#"<div><h3><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></h3><p>By: <a href="{}" target="_blank" rel="noopener noreferrer">{}</a></p><p>Parts: {}</p></div></li>"#,
		escape_html(&build.moc_url),
		escape_html(&build.name),
		escape_html(&build.designer_url),
		escape_html(&build.designer_name),
		build.num_parts
	);
}

/// Plain-text rendering for terminals.
pub fn render_text(controller: &SearchController) -> String {
	match controller.state() {
		SearchState::Idle => String::new(),
		SearchState::Loading => "Loading MOCs...\n".to_string(),
		SearchState::Error(message) => format!("Error: {message}\n"),
		SearchState::Success(response) => {
			let mut out = format!(
				"Results for Set: {}\nFound {} alternate build(s).\n",
				results_label(controller, response),
				response.count
			);
			if response.count > 0 {
				for (i, build) in response.results.iter().enumerate() {
					let _ = write!(
						out,
						"\n{}. {}\n   By: {} ({})\n   Parts: {}\n   Link: {}\n",
						i + 1,
						build.name,
						build.designer_name,
						build.designer_url,
						build.num_parts,
						build.moc_url
					);
					if let Some(img) = &build.moc_img_url {
						let _ = writeln!(out, "   Image: {img}");
					}
				}
			}
			out
		}
	}
}

// Heading shows the first result's set number, or what the user asked for.
fn results_label<'a>(controller: &'a SearchController, response: &'a SearchResponse) -> &'a str {
	response
		.results
		.first()
		.map(|b| b.set_num.as_str())
		.or_else(|| controller.query().map(|q| q.as_str()))
		.unwrap_or_else(|| controller.input())
}

pub fn escape_html(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::transport::ProxyReply;

	fn settled(input: &str, status: u16, body: &str) -> SearchController {
		let mut controller = SearchController::with_input(input);
		controller.begin();
		controller.finish(Ok(ProxyReply {
			status,
			body: body.as_bytes().to_vec(),
		}));
		controller
	}

	const ONE_RESULT: &str = r#"{"count":1,"next":null,"previous":null,"results":[{"set_num":"10305-1","name":"X","num_parts":5,"moc_img_url":null,"moc_url":"u","designer_name":"D","designer_url":"du"}]}"#;

	#[test]
	fn idle_page_has_form_only() {
		let html = render_page(&SearchController::new());
		assert!(html.contains(r#"<form method="get" action="/">"#));
		assert!(html.contains(">Search</button>"));
		assert!(!html.contains("role=\"alert\""));
		assert!(!html.contains("<section"));
	}

	#[test]
	fn loading_disables_controls() {
		let mut controller = SearchController::with_input("10305");
		controller.begin();
		let html = render_page(&controller);
		assert!(html.contains("<button type=\"submit\" disabled>Searching...</button>"));
		assert!(html.contains("value=\"10305\" disabled>"));
		assert!(html.contains("Loading MOCs..."));
	}

	#[test]
	fn empty_submission_shows_prompt() {
		let mut controller = SearchController::with_input("");
		controller.begin();
		let html = render_page(&controller);
		assert!(html.contains("Error: Please enter a LEGO set number."));
	}

	#[test]
	fn zero_results_render_count_and_no_items() {
		let controller = settled(
			"10305",
			200,
			r#"{"count":0,"next":null,"previous":null,"results":[]}"#,
		);
		let html = render_page(&controller);
		assert!(html.contains("Found 0 alternate build(s)."));
		assert!(html.contains("Results for Set: <span>10305</span>"));
		assert!(!html.contains("<li"));
	}

	#[test]
	fn single_result_without_image() {
		let html = render_page(&settled("10305", 200, ONE_RESULT));
		assert_eq!(html.matches("<li ").count(), 1);
		assert!(html.contains(r#"<li data-key="10305-1">"#));
		assert!(html.contains(r#"<a href="u" target="_blank" rel="noopener noreferrer">X</a>"#));
		assert!(html.contains(r#"By: <a href="du" target="_blank" rel="noopener noreferrer">D</a>"#));
		assert!(html.contains("Parts: 5"));
		assert!(!html.contains("<img"));
	}

	#[test]
	fn image_is_rendered_when_present() {
		let body = ONE_RESULT.replace(r#""moc_img_url":null"#, r#""moc_img_url":"https://img/x.jpg""#);
		let html = render_page(&settled("10305", 200, &body));
		assert!(html.contains(r#"<img src="https://img/x.jpg" alt="Image of X">"#));
	}

	#[test]
	fn upstream_text_is_escaped() {
		let body = ONE_RESULT.replace(r#""name":"X""#, r#""name":"<script>alert(1)</script>""#);
		let html = render_page(&settled("10305", 200, &body));
		assert!(!html.contains("<script>"));
		assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
	}

	#[test]
	fn same_response_renders_identically() {
		let first = render_page(&settled("10305", 200, ONE_RESULT));
		let second = render_page(&settled("10305", 200, ONE_RESULT));
		assert_eq!(first, second);
	}

	#[test]
	fn text_rendering_lists_results() {
		let text = render_text(&settled("10305", 200, ONE_RESULT));
		assert!(text.starts_with("Results for Set: 10305-1\nFound 1 alternate build(s).\n"));
		assert!(text.contains("1. X\n   By: D (du)\n   Parts: 5\n   Link: u\n"));
		assert!(!text.contains("Image:"));
	}

	#[test]
	fn text_rendering_of_error() {
		let text = render_text(&settled(
			"10305",
			500,
			r#"{"error":"Internal server error: API key missing"}"#,
		));
		assert_eq!(text, "Error: Internal server error: API key missing\n");
	}

	#[test]
	fn escape_covers_attribute_breakers() {
		assert_eq!(escape_html(r#"a"b'c&<>"#), "a&quot;b&#39;c&amp;&lt;&gt;");
	}
}
