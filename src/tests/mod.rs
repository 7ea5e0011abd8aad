mod integration_search_index;
mod unit_markdown_parser;
