use mailqr::qr::{
    AccountName, AccountRecord, AuthenticationType, ConnectionSecurity, IncomingProtocol,
    Sequence, encode, encode_sequence, encode_with_sequence,
};
use serde_json::{Value, json};

fn basic_account() -> AccountRecord {
    AccountRecord {
        incoming_protocol: IncomingProtocol::Imap,
        incoming_hostname: "imap.example.com".to_string(),
        incoming_port: 993,
        incoming_connection_security: ConnectionSecurity::Tls,
        incoming_authentication_type: AuthenticationType::PasswordCleartext,
        incoming_username: "email@example.com".to_string(),
        incoming_account_name: AccountName::Absent,
        incoming_password: None,
        outgoing_hostname: "smtp.example.com".to_string(),
        outgoing_port: 465,
        outgoing_connection_security: ConnectionSecurity::Tls,
        outgoing_authentication_type: AuthenticationType::PasswordCleartext,
        outgoing_username: "email@example.com".to_string(),
        outgoing_password: None,
        identity_email_address: "email@example.com".to_string(),
        identity_display_name: "Test account".to_string(),
    }
}

fn parse(payload: &str) -> Vec<Value> {
    match serde_json::from_str(payload).expect("payload should be json") {
        Value::Array(items) => items,
        other => panic!("expected top-level array, got {other}"),
    }
}

fn incoming(payload: &str, account: usize) -> Vec<Value> {
    match &parse(payload)[2 + 2 * account] {
        Value::Array(items) => items.clone(),
        other => panic!("expected incoming array, got {other}"),
    }
}

#[test]
fn encodes_single_account() {
    let payload = encode(&[basic_account()]).expect("encode");

    assert_eq!(
        serde_json::from_str::<Value>(&payload).expect("json"),
        json!([
            1,
            [1, 1],
            [0, "imap.example.com", 993, 3, 1, "email@example.com"],
            [[
                [0, "smtp.example.com", 465, 3, 1, "email@example.com"],
                ["email@example.com", "Test account"]
            ]]
        ])
    );
}

#[test]
fn encodes_account_file_scenario() {
    let records = mailqr::input::parse_accounts(
        r#"[{
            "incomingProtocol": 0,
            "incomingHostname": "imap.example.com",
            "incomingPort": 993,
            "incomingConnectionSecurity": 3,
            "incomingAuthenticationType": 1,
            "incomingUsername": "e@x.com",
            "outgoingHostname": "smtp.example.com",
            "outgoingPort": 465,
            "outgoingConnectionSecurity": 3,
            "outgoingAuthenticationType": 1,
            "outgoingUsername": "e@x.com",
            "identityEmailAddress": "e@x.com",
            "identityDisplayName": "Test"
        }]"#,
        "scenario",
    )
    .expect("records");

    let payload = encode(&records).expect("encode");
    assert_eq!(
        payload,
        r#"[1,[1,1],[0,"imap.example.com",993,3,1,"e@x.com"],[[[0,"smtp.example.com",465,3,1,"e@x.com"],["e@x.com","Test"]]]]"#
    );
}

#[test]
fn encodes_multiple_accounts_with_sequence() {
    let first = AccountRecord {
        incoming_connection_security: ConnectionSecurity::AlwaysStartTls,
        incoming_authentication_type: AuthenticationType::PasswordEncrypted,
        incoming_username: "emailuser".to_string(),
        incoming_account_name: AccountName::Value("test".to_string()),
        incoming_password: Some("hunter2".to_string()),
        outgoing_username: "smtpuser".to_string(),
        outgoing_password: Some("hunter2".to_string()),
        identity_email_address: "other@example.com".to_string(),
        ..basic_account()
    };
    let second = AccountRecord {
        incoming_protocol: IncomingProtocol::Pop3,
        incoming_hostname: "pop.example.com".to_string(),
        incoming_port: 110,
        incoming_connection_security: ConnectionSecurity::AlwaysStartTls,
        incoming_account_name: AccountName::Null,
        incoming_password: Some("hunter2".to_string()),
        outgoing_password: Some(String::new()),
        identity_display_name: "Test account 2".to_string(),
        ..basic_account()
    };

    let payload = encode_with_sequence(&[first, second], Sequence::new(2, 5)).expect("encode");

    assert_eq!(
        serde_json::from_str::<Value>(&payload).expect("json"),
        json!([
            1,
            [2, 5],
            [0, "imap.example.com", 993, 2, 2, "emailuser", "test", "hunter2"],
            [[
                [0, "smtp.example.com", 465, 3, 1, "smtpuser", "hunter2"],
                ["other@example.com", "Test account"]
            ]],
            [1, "pop.example.com", 110, 2, 1, "email@example.com", null, "hunter2"],
            [[
                [0, "smtp.example.com", 465, 3, 1, "email@example.com"],
                ["email@example.com", "Test account 2"]
            ]]
        ])
    );
}

#[test]
fn absent_account_name_drops_password() {
    let account = AccountRecord {
        incoming_password: Some("x".to_string()),
        ..basic_account()
    };
    let payload = encode(&[account]).expect("encode");
    assert_eq!(incoming(&payload, 0).len(), 6);
}

#[test]
fn null_account_name_keeps_password() {
    let account = AccountRecord {
        incoming_account_name: AccountName::Null,
        incoming_password: Some("x".to_string()),
        ..basic_account()
    };
    let payload = encode(&[account]).expect("encode");
    let items = incoming(&payload, 0);
    assert_eq!(items.len(), 8);
    assert_eq!(items[6..], [Value::Null, json!("x")]);
}

#[test]
fn empty_account_name_is_written_as_empty_string() {
    let account = AccountRecord {
        incoming_account_name: AccountName::Value(String::new()),
        ..basic_account()
    };
    let payload = encode(&[account]).expect("encode");
    let items = incoming(&payload, 0);
    assert_eq!(items.len(), 7);
    assert_eq!(items[6], json!(""));
}

#[test]
fn empty_incoming_password_is_left_out() {
    let account = AccountRecord {
        incoming_account_name: AccountName::Value("work".to_string()),
        incoming_password: Some(String::new()),
        ..basic_account()
    };
    let payload = encode(&[account]).expect("encode");
    assert_eq!(incoming(&payload, 0).len(), 7);
}

#[test]
fn sequence_is_carried_verbatim() {
    let payload = encode_with_sequence(&[], Sequence::new(7, 3)).expect("encode");
    assert_eq!(payload, "[1,[7,3]]");
}

#[test]
fn escapes_strings() {
    let account = AccountRecord {
        identity_display_name: "Jane \"JD\" Doe\n".to_string(),
        ..basic_account()
    };
    let payload = encode(&[account]).expect("encode");
    assert!(payload.contains(r#"["email@example.com","Jane \"JD\" Doe\n"]"#));
}

#[test]
fn split_payloads_number_their_codes() {
    let accounts = vec![basic_account(); 5];
    let payloads = encode_sequence(&accounts, 2).expect("encode");

    assert_eq!(payloads.len(), 3);
    for (index, part) in payloads.iter().enumerate() {
        let items = parse(&part.payload);
        assert_eq!(items[1], json!([index + 1, 3]));
        assert_eq!(items.len(), 2 + 2 * part.accounts);
    }
    assert_eq!(payloads[2].accounts, 1);
}
