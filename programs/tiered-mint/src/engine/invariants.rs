//! Property tests over random operation sequences.

use anchor_lang::prelude::Pubkey;
use proptest::prelude::*;

use crate::engine::admission::{admit_free_mint, admit_mint, admit_partner_mint, admit_reserve};
use crate::engine::fixtures::{buyer, partnership, sale, SEVENTY_TWO_HOURS, T0};
use crate::state::{AccessList, BuyerRecord, Partnerships, SaleState};

#[derive(Clone, Debug)]
enum Op {
    Mint { who: usize, quantity: u64, pay_items: u64, at: i64 },
    FreeMint { partner: usize, quantity: u64 },
    PartnerMint { partner: usize, quantity: u64, pay_items: u64, at: i64 },
    Reserve { quantity: u64, at: i64 },
}

fn op() -> impl Strategy<Value = Op> {
    let at = 0i64..(2 * SEVENTY_TWO_HOURS);
    prop_oneof![
        (0usize..3, 0u64..8, 0u64..8, at.clone()).prop_map(|(who, quantity, pay_items, at)| {
            Op::Mint { who, quantity, pay_items, at }
        }),
        (0usize..3, 0u64..40).prop_map(|(partner, quantity)| Op::FreeMint { partner, quantity }),
        (0usize..3, 0u64..40, 0u64..40, at.clone()).prop_map(
            |(partner, quantity, pay_items, at)| Op::PartnerMint {
                partner,
                quantity,
                pay_items,
                at
            }
        ),
        (0u64..60, at).prop_map(|(quantity, at)| Op::Reserve { quantity, at }),
    ]
}

struct World {
    sale: SaleState,
    partnerships: Partnerships,
    access: AccessList,
    buyers: Vec<BuyerRecord>,
    partners: Vec<Pubkey>,
}

fn world(max_supply: u64) -> World {
    let mut sale = sale(max_supply);
    sale.schedule_presale(T0, T0 + SEVENTY_TWO_HOURS / 2);
    sale.schedule_sale(T0 + SEVENTY_TWO_HOURS / 4);

    let buyers = vec![buyer(), buyer(), buyer()];
    let mut access = AccessList::default();
    access.grant(&[buyers[0].buyer, buyers[1].buyer]).unwrap();

    let mut partnerships = Partnerships::default();
    let mut partners = Vec::new();
    for (discount, discounted, free, until) in [
        (20u8, 30u64, 20u64, T0 + SEVENTY_TWO_HOURS),
        (50, 10, 40, T0 + SEVENTY_TWO_HOURS / 2),
    ] {
        let new = partnership(discount, discounted, free, until);
        partners.push(new.partner);
        partnerships.create(new).unwrap();
    }
    // A caller with no partnership.
    partners.push(Pubkey::new_unique());

    World {
        sale,
        partnerships,
        access,
        buyers,
        partners,
    }
}

proptest! {
    #[test]
    fn issued_never_exceeds_max_supply_and_rejections_are_no_ops(
        max_supply in 1u64..200,
        ops in proptest::collection::vec(op(), 1..60),
    ) {
        let mut w = world(max_supply);
        let public_price = w.sale.public_price;

        for op in ops {
            let sale_before = w.sale.clone();
            let partnerships_before = w.partnerships.clone();
            let buyers_before = w.buyers.clone();

            let result = match op {
                Op::Mint { who, quantity, pay_items, at } => admit_mint(
                    &mut w.sale,
                    &w.partnerships,
                    &w.access,
                    &mut w.buyers[who],
                    quantity,
                    pay_items * public_price,
                    T0 + at,
                )
                .map(|a| a.issuance),
                Op::FreeMint { partner, quantity } => {
                    let key = w.partners[partner];
                    admit_free_mint(&mut w.sale, &mut w.partnerships, &key, quantity)
                }
                Op::PartnerMint { partner, quantity, pay_items, at } => {
                    let key = w.partners[partner];
                    admit_partner_mint(
                        &mut w.sale,
                        &mut w.partnerships,
                        &key,
                        quantity,
                        pay_items * public_price,
                        T0 + at,
                    )
                }
                Op::Reserve { quantity, at } => {
                    admit_reserve(&mut w.sale, &w.partnerships, quantity, T0 + at)
                }
            };

            prop_assert!(w.sale.issued <= w.sale.max_supply);
            match result {
                Ok(issuance) => {
                    prop_assert_eq!(w.sale.issued, sale_before.issued + issuance.quantity);
                    prop_assert_eq!(issuance.first_item_id, sale_before.issued + 1);
                }
                Err(_) => {
                    prop_assert_eq!(&w.sale, &sale_before);
                    prop_assert_eq!(&w.partnerships, &partnerships_before);
                    prop_assert_eq!(&w.buyers, &buyers_before);
                }
            }
            for (after, before) in w.partnerships.entries.iter().zip(&partnerships_before.entries) {
                prop_assert!(after.free_remaining <= before.free_remaining);
                prop_assert!(after.discounted_remaining <= before.discounted_remaining);
            }
        }
    }

    #[test]
    fn grant_and_revoke_are_idempotent(n in 0usize..20, repeat in 1usize..4) {
        let wallets: Vec<Pubkey> = (0..n).map(|_| Pubkey::new_unique()).collect();
        let mut list = AccessList::default();
        list.grant(&wallets).unwrap();
        let granted = list.wallets.clone();
        for _ in 0..repeat {
            prop_assert_eq!(list.grant(&wallets).unwrap(), 0);
            prop_assert_eq!(&list.wallets, &granted);
        }
        list.revoke(&wallets);
        for _ in 0..repeat {
            prop_assert_eq!(list.revoke(&wallets), 0);
            prop_assert!(list.wallets.is_empty());
        }
    }
}
