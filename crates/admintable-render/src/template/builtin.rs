//! Templates shipped with the renderer.
//!
//! Each entry is registered under its name when a [`Renderer`](super::Renderer)
//! is created. Hosts override any of them by registering a template with the
//! same name afterwards, most commonly [`PAGINATION`] to plug in the site's
//! real pagination controls.

/// Outer table shell.
pub const TABLE: &str = "admintable/table.html";
/// Header cells, one `<th>` per entry in `headers`.
pub const HEADERS: &str = "admintable/headers.html";
/// One data row: pre-rendered `row.cells` followed by `row.tools`.
pub const ROW: &str = "admintable/row.html";
/// Edit/delete actions cell.
pub const TOOLS: &str = "admintable/tools.html";
/// Pagination partial included after the table.
pub const PAGINATION: &str = "partials/pagination_table.html";

const TABLE_SOURCE: &str = concat!(
    r#"{% if wrapper_class %}<div class="{{ wrapper_class }}">{% endif %}"#,
    r#"<table class="{{ css_class }}">"#,
    "{% if title %}<caption>{{ title }}</caption>{% endif %}",
    r#"<thead><tr>{% include "admintable/headers.html" %}</tr></thead>"#,
    r#"<tbody>{% for row in rows %}{% include "admintable/row.html" %}{% endfor %}</tbody>"#,
    "</table>",
    r#"{% include "partials/pagination_table.html" %}"#,
    "{% if wrapper_class %}</div>{% endif %}",
);

const HEADERS_SOURCE: &str = "{% for header in headers %}<th>{{ header }}</th>{% endfor %}";

const ROW_SOURCE: &str = concat!(
    "<tr>",
    "{% for cell in row.cells %}<td>{{ cell|safe }}</td>{% endfor %}",
    "{{ row.tools|safe }}",
    "</tr>",
);

// A link without a URL keeps `href="#"` so it still renders as a link.
const TOOLS_SOURCE: &str = concat!(
    r#"<td class="{{ tools.class }}">"#,
    "{% for link in [tools.edit, tools.delete] %}",
    "{% if not loop.first %} {% endif %}",
    "<a data-no-pjax",
    r##"{% if link.url %} href="{{ link.url }}"{% else %} href="#" aria-disabled="true"{% endif %}"##,
    r#"{% if link.title %} title="{{ link.title }}"{% endif %}"#,
    r#"{% if link.modal %} data-modal-delete="{{ link.modal }}" data-modal-name=""{% endif %}"#,
    r#" class="{{ link.class }}">{{ link.label }}</a>"#,
    "{% endfor %}",
    "</td>",
);

const PAGINATION_SOURCE: &str = concat!(
    "{% if page is defined and num_pages is defined and num_pages > 1 %}",
    r#"<nav class="pagination">"#,
    r#"{% if page > 1 %}<a href="?page={{ page - 1 }}">&laquo;</a> {% endif %}"#,
    "<span>{{ page }} / {{ num_pages }}</span>",
    r#"{% if page < num_pages %} <a href="?page={{ page + 1 }}">&raquo;</a>{% endif %}"#,
    "</nav>",
    "{% endif %}",
);

/// All built-in templates as `(name, source)` pairs.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (TABLE, TABLE_SOURCE),
    (HEADERS, HEADERS_SOURCE),
    (ROW, ROW_SOURCE),
    (TOOLS, TOOLS_SOURCE),
    (PAGINATION, PAGINATION_SOURCE),
];
