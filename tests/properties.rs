use mailqr::qr::{
    AccountName, AccountRecord, AuthenticationType, ConnectionSecurity, IncomingProtocol,
    Sequence, encode_with_sequence,
};
use proptest::prelude::*;
use serde_json::Value;

fn account_name() -> impl Strategy<Value = AccountName> {
    prop_oneof![
        Just(AccountName::Absent),
        Just(AccountName::Null),
        ".{0,8}".prop_map(AccountName::Value),
    ]
}

prop_compose! {
    fn account()(
        pop3 in any::<bool>(),
        hostname in "[a-z]{1,12}\\.example\\.com",
        port in any::<u16>(),
        security in prop::sample::select(ConnectionSecurity::ALL.to_vec()),
        auth in prop::sample::select(AuthenticationType::ALL.to_vec()),
        username in ".{0,16}",
        name in account_name(),
        password in prop::option::of(".{0,8}"),
        outgoing_password in prop::option::of(".{0,8}"),
    ) -> AccountRecord {
        AccountRecord {
            incoming_protocol: if pop3 { IncomingProtocol::Pop3 } else { IncomingProtocol::Imap },
            incoming_hostname: hostname.clone(),
            incoming_port: port,
            incoming_connection_security: security,
            incoming_authentication_type: auth,
            incoming_username: username.clone(),
            incoming_account_name: name,
            incoming_password: password,
            outgoing_hostname: hostname,
            outgoing_port: port,
            outgoing_connection_security: security,
            outgoing_authentication_type: auth,
            outgoing_username: username.clone(),
            outgoing_password,
            identity_email_address: username,
            identity_display_name: "Prop".to_string(),
        }
    }
}

fn array(value: &Value) -> &Vec<Value> {
    value.as_array().expect("array")
}

proptest! {
    #[test]
    fn envelope_has_two_elements_per_account(
        accounts in prop::collection::vec(account(), 0..6),
        position in 1u32..10,
        total in 1u32..10,
    ) {
        let sequence = Sequence::new(position, total);
        let payload = encode_with_sequence(&accounts, sequence).expect("encode");
        let value: Value = serde_json::from_str(&payload).expect("json");
        let items = array(&value);

        prop_assert_eq!(items.len(), 2 + 2 * accounts.len());
        prop_assert_eq!(&items[0], &Value::from(1));
        prop_assert_eq!(&items[1], &Value::from(vec![position, total]));
    }

    #[test]
    fn optional_slots_follow_the_cascade(record in account()) {
        let payload = encode_with_sequence(std::slice::from_ref(&record), Sequence::default())
            .expect("encode");
        let value: Value = serde_json::from_str(&payload).expect("json");
        let items = array(&value);

        let incoming = array(&items[2]);
        let has_password = record.incoming_password.as_deref().is_some_and(|p| !p.is_empty());
        let expected = match (&record.incoming_account_name, has_password) {
            (AccountName::Absent, _) => 6,
            (_, false) => 7,
            (_, true) => 8,
        };
        prop_assert_eq!(incoming.len(), expected);

        let groups = array(&items[3]);
        prop_assert_eq!(groups.len(), 1);
        let pair = array(&groups[0]);
        let outgoing = array(&pair[0]);
        let has_outgoing_password =
            record.outgoing_password.as_deref().is_some_and(|p| !p.is_empty());
        prop_assert_eq!(outgoing.len(), 6 + usize::from(has_outgoing_password));
        prop_assert_eq!(&outgoing[0], &Value::from(0));
        prop_assert_eq!(array(&pair[1]).len(), 2);
    }
}
