//! The fixed resume layout, as a handlebars template.
//!
//! The layout is a static asset, not a user-facing feature: authors edit
//! their YAML, never this markup. Fields flow through two registered
//! helpers — `links` (escape, then inline-link conversion) and `dates`
//! (escape, then hyphen → en-dash) — always via triple-stash so the helper
//! output, which is already safe markup, is not escaped a second time.
//! Every other scalar goes through handlebars' default HTML escaping.

/// Complete HTML document for one resume, handlebars syntax.
pub const RESUME_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{{name}}</title>
    <style>
        @page {
            size: letter;
            margin: 0.5in 0.75in;
        }

        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: "Inter", -apple-system, "Segoe UI", sans-serif;
            font-size: 11pt;
            line-height: 1.4;
            color: #000;
        }

        .header {
            text-align: center;
            margin-bottom: 8pt;
        }

        .header h1 {
            font-size: 16pt;
            font-weight: 700;
            margin-bottom: 2pt;
            letter-spacing: 0.02em;
        }

        .header .contact {
            font-size: 11pt;
        }

        .section {
            margin-bottom: 10pt;
        }

        .section-title {
            font-size: 11pt;
            font-weight: 700;
            text-transform: uppercase;
            letter-spacing: 0.05em;
            margin-bottom: 4pt;
            padding-bottom: 2pt;
            border-bottom: 0.5pt solid #000;
        }

        a {
            color: #000;
            text-decoration: none;
            border-bottom: 1px dotted #999;
        }

        .skills-list {
            margin-left: 15pt;
        }

        .skill-item {
            margin-bottom: 3pt;
        }

        .role-item {
            margin-bottom: 4pt;
        }

        .role-header {
            display: flex;
            justify-content: space-between;
            align-items: baseline;
            margin-top: 1pt;
        }

        .role-title {
            font-weight: 600;
        }

        .role-dates {
            font-style: italic;
            font-size: 10pt;
        }

        .responsibilities {
            margin-left: 12pt;
            margin-top: 1pt;
        }

        .responsibilities li {
            margin-bottom: 1pt;
        }

        .award-item, .education-item, .project-item {
            margin-bottom: 6pt;
        }

        .award-header, .education-header {
            display: flex;
            justify-content: space-between;
            align-items: baseline;
            margin-bottom: 1pt;
        }

        .award-name, .institution, .project-name {
            font-weight: 600;
        }

        .award-date {
            font-style: italic;
            font-size: 10pt;
        }

        .award-description {
            margin-left: 12pt;
        }

        .coursework {
            margin-left: 12pt;
        }

        .project-header {
            margin-bottom: 1pt;
        }

        .project-url {
            float: right;
            font-style: italic;
        }

        .project-tech {
            font-style: italic;
        }
    </style>
</head>
<body>
    <div class="header">
        <h1>{{{links name}}}</h1>
        <div class="contact">{{{links location}}} &mdash; {{{links email}}} &mdash; {{{links website}}}</div>
    </div>

    <div class="section">
        <div class="section-title">Skills</div>
        <div class="skills-list">
            {{#each skills}}
            <div class="skill-item">&bull; <strong>{{category}}:</strong> {{#each items}}{{{links this}}}{{#unless @last}}, {{/unless}}{{/each}}</div>
            {{/each}}
        </div>
    </div>

    <div class="section">
        <div class="section-title">Experience</div>
        {{#each experience}}
        {{#each roles}}
        <div class="role-item">
            <div class="role-header">
                <span class="role-title">{{{links title}}}</span>
                <span class="role-dates">{{{dates dates}}}</span>
            </div>
            <div>{{{links ../company}}} &bull; {{../location}}</div>
            <ul class="responsibilities">
                {{#each responsibilities}}
                <li>{{{links this}}}</li>
                {{/each}}
            </ul>
        </div>
        {{/each}}
        {{/each}}
    </div>

    {{#if awards}}
    <div class="section">
        <div class="section-title">Awards</div>
        {{#each awards}}
        <div class="award-item">
            <div class="award-header">
                <span class="award-name">{{{links name}}}</span>
                <span class="award-date">{{{dates date}}}</span>
            </div>
            <div>{{{links organization}}}{{#if team}} &bull; {{team}}{{/if}}</div>
            {{#if description}}
            <div class="award-description">{{{links description}}}</div>
            {{/if}}
        </div>
        {{/each}}
    </div>
    {{/if}}

    <div class="section">
        <div class="section-title">Education</div>
        {{#each education}}
        <div class="education-item">
            <div class="education-header">
                <span class="institution">{{{links degree}}}</span>
                <span class="award-date">{{{dates graduation}}}</span>
            </div>
            <div>{{{links institution}}}{{#if gpa}} &bull; {{gpa}}{{/if}}</div>
            {{#if coursework}}
            <div class="coursework"><strong>&bull; Coursework:</strong> {{#each coursework}}{{{links this}}}{{#unless @last}}, {{/unless}}{{/each}}</div>
            {{/if}}
        </div>
        {{/each}}
    </div>

    <div class="section">
        <div class="section-title">Selected Work</div>
        {{#each projects}}
        <div class="project-item">
            <div class="project-header">
                <span class="project-name">{{{links name}}}</span>
                <span class="project-url">{{{links url}}}</span>
            </div>
            <div class="project-tech">{{#each technologies}}{{{links this}}}{{#unless @last}}, {{/unless}}{{/each}}</div>
            <ul class="responsibilities">
                <li>{{{links description}}}</li>
            </ul>
        </div>
        {{/each}}
    </div>
</body>
</html>
"##;
