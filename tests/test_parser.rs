use lantern::http::error::ParseError;
use lantern::http::header::HeaderId;
use lantern::http::message::MessageType;
use lantern::http::parser::{
    HeaderPolicy, message_type, parse_header_line, parse_message, parse_message_with,
    parse_request_line, parse_status_line,
};
use lantern::http::request::Method;

#[test]
fn test_classify_request_and_response() {
    assert_eq!(message_type("GET / HTTP/1.0\r\nFrom: a@b"), MessageType::Request);
    assert_eq!(message_type("HTTP/1.0 200 Ok\r\nServer: x"), MessageType::Response);
    assert_eq!(message_type("200 Ok\r\n"), MessageType::Response);
    assert_eq!(message_type("POST /f.txt HTTP/1.0\r\n"), MessageType::Request);
    assert_eq!(message_type("HEAD / HTTP/1.0"), MessageType::Request);
    assert_eq!(message_type("GET /"), MessageType::Request);
    assert_eq!(message_type(""), MessageType::Unknown);
}

#[test]
fn test_parse_request_line_full() {
    let line = parse_request_line("GET /index.html HTTP/1.0").unwrap();

    assert_eq!(line.method, Method::GET);
    assert_eq!(line.uri, "/index.html");
    assert_eq!(line.version, Some("HTTP/1.0"));
    assert!(!line.is_simple());
}

#[test]
fn test_parse_simple_request_without_version() {
    let line = parse_request_line("GET /old.html").unwrap();

    assert_eq!(line.method, Method::GET);
    assert_eq!(line.uri, "/old.html");
    assert_eq!(line.version, None);
    assert!(line.is_simple());
}

#[test]
fn test_parse_request_line_unknown_method() {
    let result = parse_request_line("PUT / HTTP/1.0");
    assert!(matches!(result, Err(ParseError::InvalidMethod(m)) if m == "PUT"));

    let result = parse_request_line("get / HTTP/1.0");
    assert!(matches!(result, Err(ParseError::InvalidMethod(_))));
}

#[test]
fn test_parse_request_line_missing_uri() {
    assert!(matches!(
        parse_request_line("GET"),
        Err(ParseError::InvalidRequestLine(_))
    ));
    assert!(matches!(
        parse_request_line(""),
        Err(ParseError::InvalidRequestLine(_))
    ));
}

#[test]
fn test_parse_request_line_too_many_tokens() {
    assert!(matches!(
        parse_request_line("GET / HTTP/1.0 extra"),
        Err(ParseError::InvalidRequestLine(_))
    ));
}

#[test]
fn test_parse_status_line_with_spaces_in_reason() {
    let line = parse_status_line("HTTP/1.0 404 Not Found").unwrap();

    assert_eq!(line.version, "HTTP/1.0");
    assert_eq!(line.code, 404);
    assert_eq!(line.reason, "Not Found");
}

#[test]
fn test_parse_status_line_rejects_garbage() {
    assert!(matches!(
        parse_status_line("200 Ok"),
        Err(ParseError::InvalidStatusLine(_))
    ));
    assert!(matches!(
        parse_status_line("HTTP/1.0 abc Ok"),
        Err(ParseError::InvalidStatusLine(_))
    ));
    assert!(matches!(
        parse_status_line("HTTP/1.0"),
        Err(ParseError::InvalidStatusLine(_))
    ));
}

#[test]
fn test_parse_header_line_trims_value() {
    assert_eq!(
        parse_header_line("Content-Type:   text/html  \r\n").unwrap(),
        (HeaderId::ContentType, "text/html")
    );
    assert_eq!(
        parse_header_line("Server:lantern").unwrap(),
        (HeaderId::Server, "lantern")
    );
}

#[test]
fn test_parse_header_line_ignores_leading_whitespace() {
    assert_eq!(
        parse_header_line("  From: ops@example.com").unwrap(),
        (HeaderId::From, "ops@example.com")
    );
    assert_eq!(
        parse_header_line("\tPragma:no-cache\r\n").unwrap(),
        (HeaderId::Pragma, "no-cache")
    );
}

#[test]
fn test_parse_header_line_splits_on_first_colon() {
    assert_eq!(
        parse_header_line("Location: http://example.com:8080/x").unwrap(),
        (HeaderId::Location, "http://example.com:8080/x")
    );
}

#[test]
fn test_parse_header_line_failures() {
    assert!(matches!(
        parse_header_line("BrokenHeader"),
        Err(ParseError::MissingColon(_))
    ));
    assert!(matches!(
        parse_header_line("Host: example.com"),
        Err(ParseError::UnknownHeader(name)) if name == "Host"
    ));
    assert!(matches!(
        parse_header_line("content-type: text/html"),
        Err(ParseError::UnknownHeader(_))
    ));
}

#[test]
fn test_parse_get_request_with_headers() {
    let req = b"GET /path HTTP/1.0\r\nUser-Agent: test-client\r\nFrom: me@example.com\r\n\r\n";
    let parsed = parse_message(req).unwrap();

    assert_eq!(parsed.message_type(), MessageType::Request);
    let line = parsed.request_line().unwrap();
    assert_eq!(line.method, Method::GET);
    assert_eq!(line.uri, "/path");
    assert_eq!(parsed.header(HeaderId::UserAgent), Some("test-client"));
    assert_eq!(parsed.header(HeaderId::From), Some("me@example.com"));
    assert_eq!(parsed.header(HeaderId::Referer), None);
    assert!(parsed.entity.is_none());
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /api HTTP/1.0\r\nContent-Length: 5\r\n\r\nhello";
    let parsed = parse_message(req).unwrap();

    assert_eq!(parsed.request_line().unwrap().method, Method::POST);
    assert_eq!(parsed.entity, Some(&b"hello"[..]));
}

#[test]
fn test_entity_borrows_from_input() {
    let req = b"POST /api HTTP/1.0\r\nContent-Length: 4\r\n\r\n\x00\x01\x02\x03";
    let parsed = parse_message(req).unwrap();

    let entity = parsed.entity.unwrap();
    assert_eq!(entity, &[0, 1, 2, 3]);
    assert!(std::ptr::eq(entity.as_ptr(), req[req.len() - 4..].as_ptr()));
}

#[test]
fn test_entity_limited_to_content_length() {
    let req = b"POST /api HTTP/1.0\r\nContent-Length: 2\r\n\r\nhello";
    let parsed = parse_message(req).unwrap();

    assert_eq!(parsed.entity, Some(&b"he"[..]));
}

#[test]
fn test_parse_request_with_empty_body() {
    let req = b"POST /api HTTP/1.0\r\nContent-Length: 0\r\n\r\n";
    let parsed = parse_message(req).unwrap();

    assert_eq!(parsed.entity, Some(&b""[..]));
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.0\r\nUser-Agent: x\r\n";
    assert!(matches!(parse_message(req), Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_incomplete_request_partial_body() {
    let req = b"POST /api HTTP/1.0\r\nContent-Length: 10\r\n\r\nhello";
    assert!(matches!(parse_message(req), Err(ParseError::Incomplete)));
}

#[test]
fn test_parse_invalid_content_length() {
    let req = b"POST /api HTTP/1.0\r\nContent-Length: lots\r\n\r\nhello";
    assert!(matches!(
        parse_message(req),
        Err(ParseError::InvalidContentLength(v)) if v == "lots"
    ));
}

#[test]
fn test_parse_signed_content_length_rejected() {
    assert!(matches!(
        parse_message(b"POST /f HTTP/1.0\r\nContent-Length: +5\r\n\r\nhello"),
        Err(ParseError::InvalidContentLength(v)) if v == "+5"
    ));
}

#[test]
fn test_parse_unknown_header_aborts() {
    let req = b"GET / HTTP/1.0\r\nHost: example.com\r\n\r\n";
    assert!(matches!(
        parse_message(req),
        Err(ParseError::UnknownHeader(_))
    ));
}

#[test]
fn test_parse_malformed_header_aborts() {
    let req = b"GET / HTTP/1.0\r\nBrokenHeader\r\n\r\n";
    assert!(matches!(parse_message(req), Err(ParseError::MissingColon(_))));
}

#[test]
fn test_skip_policy_drops_unknown_headers_only() {
    let req = b"GET / HTTP/1.0\r\nHost: example.com\r\nUser-Agent: curl\r\nAccept: */*\r\n\r\n";
    let parsed = parse_message_with(req, HeaderPolicy::SkipUnknown).unwrap();

    assert_eq!(parsed.header(HeaderId::UserAgent), Some("curl"));
    assert_eq!(parsed.headers.len(), 1);

    let broken = b"GET / HTTP/1.0\r\nBrokenHeader\r\n\r\n";
    assert!(matches!(
        parse_message_with(broken, HeaderPolicy::SkipUnknown),
        Err(ParseError::MissingColon(_))
    ));
}

#[test]
fn test_parse_invalid_method() {
    // Not a known method, so it is read as a status line and rejected.
    let req = b"INVALID / HTTP/1.0\r\n\r\n";
    assert!(matches!(
        parse_message(req),
        Err(ParseError::InvalidStatusLine(_))
    ));
}

#[test]
fn test_parse_empty_header_block() {
    assert!(matches!(
        parse_message(b"\r\n\r\n"),
        Err(ParseError::EmptyMessage)
    ));
}

#[test]
fn test_parse_non_utf8_head() {
    let req = b"GET /\xff HTTP/1.0\r\n\r\n";
    assert!(matches!(parse_message(req), Err(ParseError::InvalidEncoding)));
}

#[test]
fn test_parse_response() {
    let resp = b"HTTP/1.0 200 Ok\r\nContent-Length:3\r\nServer:lantern\r\n\r\nabc";
    let parsed = parse_message(resp).unwrap();

    assert_eq!(parsed.message_type(), MessageType::Response);
    let line = parsed.status_line().unwrap();
    assert_eq!(line.code, 200);
    assert_eq!(line.reason, "Ok");
    assert_eq!(parsed.header(HeaderId::Server), Some("lantern"));
    assert_eq!(parsed.entity, Some(&b"abc"[..]));
}

#[test]
fn test_parse_later_duplicate_header_wins() {
    let req = b"GET / HTTP/1.0\r\nPragma: a\r\nPragma: b\r\n\r\n";
    let parsed = parse_message(req).unwrap();

    assert_eq!(parsed.header(HeaderId::Pragma), Some("b"));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("HEAD", Method::HEAD),
        ("POST", Method::POST),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.0\r\n\r\n", method_str);
        let parsed = parse_message(req.as_bytes()).unwrap();
        assert_eq!(parsed.request_line().unwrap().method, expected_method);
    }
}
