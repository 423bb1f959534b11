//! Cross-crate properties, driven by the testkit generators.

use proptest::prelude::*;

use keel::{Account, AccountFactory, Address, CryptoError, Event, SignsEvents};
use keel_testkit::fixtures::TestEvent;
use keel_testkit::generators;

proptest! {
    /// Re-deriving an account from the same passphrase, nonce, and network
    /// yields byte-identical keys and address.
    #[test]
    fn account_derivation_is_deterministic(
        phrase in generators::passphrase(),
        nonce in generators::factory_nonce(),
        network in generators::network(),
    ) {
        let a = AccountFactory::with_nonce(network, nonce).seed(&phrase);
        let b = AccountFactory::with_nonce(network, nonce).seed(&phrase);

        prop_assert_eq!(a.address(), b.address());
        prop_assert_eq!(a.sign_keys(), b.sign_keys());
        prop_assert_eq!(a.encrypt_keys(), b.encrypt_keys());
    }

    /// An account reconstructed from its secret signing key alone is
    /// indistinguishable from the seeded original.
    #[test]
    fn account_rebuilds_from_sign_secret(account in generators::account()) {
        let factory = AccountFactory::with_nonce(account.address().network(), 0);
        let secret = account.sign_keys().unwrap().secret().unwrap().clone();

        let rebuilt = factory.create_from_sign_secret(secret).unwrap();
        prop_assert_eq!(rebuilt.address(), account.address());
        prop_assert_eq!(rebuilt.public_encrypt_key(), account.public_encrypt_key());
    }

    /// Messages encrypted for an account can only be opened by it, and open
    /// to the original bytes.
    #[test]
    fn encryption_roundtrip_between_accounts(
        sender in generators::account(),
        recipient in generators::account(),
        message in generators::message(256),
    ) {
        let sealed = sender.encrypt_for(&recipient, &message).unwrap();
        let opened = recipient.decrypt_from(&sender, &sealed).unwrap();
        prop_assert_eq!(opened, message);
    }

    /// A third account cannot open the box.
    #[test]
    fn encryption_rejects_third_parties(
        sender in generators::passphrase(),
        recipient in generators::passphrase(),
        eavesdropper in generators::passphrase(),
    ) {
        prop_assume!(sender != recipient && sender != eavesdropper && recipient != eavesdropper);

        let mut factory = AccountFactory::with_nonce(keel::Network::Testnet, 0);
        let sender: Account = factory.seed(&sender);
        let recipient = factory.seed(&recipient);
        let eavesdropper = factory.seed(&eavesdropper);

        let sealed = sender.encrypt_for(&recipient, b"for your eyes only").unwrap();
        prop_assert!(matches!(
            eavesdropper.decrypt_from(&sender, &sealed),
            Err(CryptoError::Decrypt(_))
        ));
    }

    /// Chain append ordering: each event links to its predecessor and the
    /// chain's latest hash tracks the last event.
    #[test]
    fn chain_append_ordering(account in generators::account()) {
        let mut chain = account.create_event_chain::<TestEvent>(Some(b"prop")).unwrap();
        let anchor = chain.latest_hash().unwrap();

        account.sign_event(chain.add(TestEvent::new(&b"one"[..], 1))).unwrap();
        account.sign_event(chain.add(TestEvent::new(&b"two"[..], 2))).unwrap();

        let events = chain.events();
        prop_assert_eq!(events[0].previous, Some(anchor));
        prop_assert_eq!(events[1].previous, Some(events[0].hash()));
        prop_assert_eq!(chain.latest_hash(), Some(events[1].hash()));
    }

    /// Addresses survive the base58 boundary.
    #[test]
    fn address_text_roundtrip(account in generators::account()) {
        let text = account.address().to_base58();
        let parsed: Address = text.parse().unwrap();
        prop_assert_eq!(&parsed, account.address());
    }
}
