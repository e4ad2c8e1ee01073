//! Release constant tables.
//!
//! Board-id allowlists and the High Sierra model denylist, taken from the
//! per-release installer eligibility data. Each table is stored sorted so
//! membership checks can binary-search; matching is case-sensitive and
//! exact.
//!
//! The upstream Yosemite and Mavericks lists each carried the pair
//! `Mac-F2218EC8` / `Mac-F2218FA9` fused into a single unmatchable token by
//! a missing separator; both tables below carry the two ids as separate
//! entries.

pub(crate) static MOUNTAIN_LION_BOARD_IDS: &[&str] = &[
    "Mac-2E6FAB96566FE58C",
    "Mac-4B7AC7E43945597E",
    "Mac-4BC72D62AD45599E",
    "Mac-66F35F19FE2A0D05",
    "Mac-6F01561E16C75D06",
    "Mac-742912EFDBEE19B3",
    "Mac-7BA5B2794B2CDB12",
    "Mac-8ED6AF5B48C039E1",
    "Mac-942452F5819B1C1B",
    "Mac-942459F5819B171B",
    "Mac-94245A3940C91C80",
    "Mac-94245B3640C91C81",
    "Mac-942B59F58194171B",
    "Mac-942B5BF58194151B",
    "Mac-942C5DF58193131B",
    "Mac-C08A6BB70A942AC2",
    "Mac-C3EC7CD22292981F",
    "Mac-F2208EC8",
    "Mac-F2218EA9",
    "Mac-F2218EC8",
    "Mac-F2218FA9",
    "Mac-F2218FC8",
    "Mac-F221BEC8",
    "Mac-F221DCC8",
    "Mac-F222BEC8",
    "Mac-F2238AC8",
    "Mac-F2238BAE",
    "Mac-F223BEC8",
    "Mac-F22586C8",
    "Mac-F22587A1",
    "Mac-F22587C8",
    "Mac-F22589C8",
    "Mac-F2268AC8",
    "Mac-F2268CC8",
    "Mac-F2268DAE",
    "Mac-F2268DC8",
    "Mac-F2268EC8",
    "Mac-F226BEC8",
    "Mac-F22788AA",
    "Mac-F227BEC8",
    "Mac-F22C86C8",
    "Mac-F22C89C8",
    "Mac-F22C8AC8",
    "Mac-F42386C8",
    "Mac-F42388C8",
    "Mac-F4238BC8",
    "Mac-F4238CC8",
    "Mac-F42C86C8",
    "Mac-F42C88C8",
    "Mac-F42C89C8",
    "Mac-F42D86A9",
    "Mac-F42D86C8",
    "Mac-F42D88C8",
    "Mac-F42D89A9",
    "Mac-F42D89C8",
];

pub(crate) static MAVERICKS_BOARD_IDS: &[&str] = &[
    "Mac-00BE6ED71E35EB86",
    "Mac-031AEE4D24BFF0B1",
    "Mac-031B6874CF7F642A",
    "Mac-27ADBB7B4CEE8E61",
    "Mac-2E6FAB96566FE58C",
    "Mac-35C1E88140C3E6CF",
    "Mac-4B7AC7E43945597E",
    "Mac-4BC72D62AD45599E",
    "Mac-50619A408DB004DA",
    "Mac-66F35F19FE2A0D05",
    "Mac-6F01561E16C75D06",
    "Mac-742912EFDBEE19B3",
    "Mac-77EB7D7DAF985301",
    "Mac-7BA5B2794B2CDB12",
    "Mac-7DF21CB3ED6977E5",
    "Mac-7DF2A3B5E5D671ED",
    "Mac-8ED6AF5B48C039E1",
    "Mac-942452F5819B1C1B",
    "Mac-942459F5819B171B",
    "Mac-94245A3940C91C80",
    "Mac-94245B3640C91C81",
    "Mac-942B59F58194171B",
    "Mac-942B5BF58194151B",
    "Mac-942C5DF58193131B",
    "Mac-AFD8A9D944EA4843",
    "Mac-C08A6BB70A942AC2",
    "Mac-C3EC7CD22292981F",
    "Mac-F2208EC8",
    "Mac-F2218EA9",
    "Mac-F2218EC8",
    "Mac-F2218FA9",
    "Mac-F2218FC8",
    "Mac-F221BEC8",
    "Mac-F221DCC8",
    "Mac-F222BEC8",
    "Mac-F2238AC8",
    "Mac-F2238BAE",
    "Mac-F223BEC8",
    "Mac-F22586C8",
    "Mac-F22587A1",
    "Mac-F22587C8",
    "Mac-F22589C8",
    "Mac-F2268AC8",
    "Mac-F2268CC8",
    "Mac-F2268DAE",
    "Mac-F2268DC8",
    "Mac-F2268EC8",
    "Mac-F226BEC8",
    "Mac-F22788AA",
    "Mac-F227BEC8",
    "Mac-F22C86C8",
    "Mac-F22C89C8",
    "Mac-F22C8AC8",
    "Mac-F42386C8",
    "Mac-F42388C8",
    "Mac-F4238BC8",
    "Mac-F4238CC8",
    "Mac-F42C86C8",
    "Mac-F42C88C8",
    "Mac-F42C89C8",
    "Mac-F42D86A9",
    "Mac-F42D86C8",
    "Mac-F42D88C8",
    "Mac-F42D89A9",
    "Mac-F42D89C8",
    "Mac-F65AE981FFA204ED",
    "Mac-FC02E91DDD3FA6A4",
];

pub(crate) static YOSEMITE_BOARD_IDS: &[&str] = &[
    "Mac-00BE6ED71E35EB86",
    "Mac-031AEE4D24BFF0B1",
    "Mac-031B6874CF7F642A",
    "Mac-189A3D4F975D5FFC",
    "Mac-27ADBB7B4CEE8E61",
    "Mac-2BD1B31983FE1663",
    "Mac-2E6FAB96566FE58C",
    "Mac-35C1E88140C3E6CF",
    "Mac-35C5E08120C7EEAF",
    "Mac-3CBD00234E554E41",
    "Mac-42FD25EABCABB274",
    "Mac-4B7AC7E43945597E",
    "Mac-4BC72D62AD45599E",
    "Mac-50619A408DB004DA",
    "Mac-66F35F19FE2A0D05",
    "Mac-6F01561E16C75D06",
    "Mac-742912EFDBEE19B3",
    "Mac-77EB7D7DAF985301",
    "Mac-7BA5B2794B2CDB12",
    "Mac-7DF21CB3ED6977E5",
    "Mac-7DF2A3B5E5D671ED",
    "Mac-81E3E92DD6088272",
    "Mac-8ED6AF5B48C039E1",
    "Mac-942452F5819B1C1B",
    "Mac-942459F5819B171B",
    "Mac-94245A3940C91C80",
    "Mac-94245B3640C91C81",
    "Mac-942B59F58194171B",
    "Mac-942B5BF58194151B",
    "Mac-942C5DF58193131B",
    "Mac-AFD8A9D944EA4843",
    "Mac-C08A6BB70A942AC2",
    "Mac-C3EC7CD22292981F",
    "Mac-F2208EC8",
    "Mac-F2218EA9",
    "Mac-F2218EC8",
    "Mac-F2218FA9",
    "Mac-F2218FC8",
    "Mac-F221BEC8",
    "Mac-F221DCC8",
    "Mac-F222BEC8",
    "Mac-F2238AC8",
    "Mac-F2238BAE",
    "Mac-F223BEC8",
    "Mac-F22586C8",
    "Mac-F22587A1",
    "Mac-F22587C8",
    "Mac-F22589C8",
    "Mac-F2268AC8",
    "Mac-F2268CC8",
    "Mac-F2268DAE",
    "Mac-F2268DC8",
    "Mac-F2268EC8",
    "Mac-F226BEC8",
    "Mac-F22788AA",
    "Mac-F227BEC8",
    "Mac-F22C86C8",
    "Mac-F22C89C8",
    "Mac-F22C8AC8",
    "Mac-F42386C8",
    "Mac-F42388C8",
    "Mac-F4238BC8",
    "Mac-F4238CC8",
    "Mac-F42C86C8",
    "Mac-F42C88C8",
    "Mac-F42C89C8",
    "Mac-F42D86A9",
    "Mac-F42D86C8",
    "Mac-F42D88C8",
    "Mac-F42D89A9",
    "Mac-F42D89C8",
    "Mac-F60DEB81FF30ACF6",
    "Mac-F65AE981FFA204ED",
    "Mac-FA842E06C61E91C5",
    "Mac-FC02E91DDD3FA6A4",
];

pub(crate) static HIGH_SIERRA_BOARD_IDS: &[&str] = &[
    "Mac-00BE6ED71E35EB86",
    "Mac-031AEE4D24BFF0B1",
    "Mac-031B6874CF7F642A",
    "Mac-06F11F11946D27C5",
    "Mac-06F11FD93F0323C5",
    "Mac-189A3D4F975D5FFC",
    "Mac-27ADBB7B4CEE8E61",
    "Mac-2BD1B31983FE1663",
    "Mac-2E6FAB96566FE58C",
    "Mac-35C1E88140C3E6CF",
    "Mac-35C5E08120C7EEAF",
    "Mac-3CBD00234E554E41",
    "Mac-42FD25EABCABB274",
    "Mac-473D31EABEB93F9B",
    "Mac-4B682C642B45593E",
    "Mac-4B7AC7E43945597E",
    "Mac-4BC72D62AD45599E",
    "Mac-50619A408DB004DA",
    "Mac-551B86E5744E2388",
    "Mac-65CE76090165799A",
    "Mac-66E35819EE2D0D05",
    "Mac-66F35F19FE2A0D05",
    "Mac-6F01561E16C75D06",
    "Mac-742912EFDBEE19B3",
    "Mac-77EB7D7DAF985301",
    "Mac-77F17D7DA9285301",
    "Mac-7BA5B2794B2CDB12",
    "Mac-7BA5B2D9E42DDD94",
    "Mac-7DF21CB3ED6977E5",
    "Mac-7DF2A3B5E5D671ED",
    "Mac-81E3E92DD6088272",
    "Mac-8ED6AF5B48C039E1",
    "Mac-90BE64C3CB5A9AEB",
    "Mac-937CB26E2E02BB01",
    "Mac-942452F5819B1C1B",
    "Mac-942459F5819B171B",
    "Mac-94245A3940C91C80",
    "Mac-94245B3640C91C81",
    "Mac-942B59F58194171B",
    "Mac-942B5BF58194151B",
    "Mac-942C5DF58193131B",
    "Mac-9AE82516C7C6B903",
    "Mac-9F18E312C5C2BF0B",
    "Mac-A369DDC4E67F1C45",
    "Mac-A5C67F76ED83108C",
    "Mac-AFD8A9D944EA4843",
    "Mac-B4831CEBD52A0C4C",
    "Mac-B809C3757DA9BB8D",
    "Mac-BE088AF8C5EB4FA2",
    "Mac-BE0E8AC46FE800CC",
    "Mac-C08A6BB70A942AC2",
    "Mac-C3EC7CD22292981F",
    "Mac-CAD6701F7CEA0921",
    "Mac-CF21D135A7D34AA6",
    "Mac-DB15BD556843C820",
    "Mac-E43C1C25D4880AD6",
    "Mac-EE2EBD4B90B839A8",
    "Mac-F2208EC8",
    "Mac-F221BEC8",
    "Mac-F221DCC8",
    "Mac-F222BEC8",
    "Mac-F2238AC8",
    "Mac-F2238BAE",
    "Mac-F22586C8",
    "Mac-F22589C8",
    "Mac-F2268CC8",
    "Mac-F2268DAE",
    "Mac-F2268DC8",
    "Mac-F22C89C8",
    "Mac-F22C8AC8",
    "Mac-F305150B0C7DEEEF",
    "Mac-F60DEB81FF30ACF6",
    "Mac-F65AE981FFA204ED",
    "Mac-FA842E06C61E91C5",
    "Mac-FC02E91DDD3FA6A4",
    "Mac-FFE5EF870D7BA81A",
];

pub(crate) static HIGH_SIERRA_MODEL_DENYLIST: &[&str] = &[
    "MacBook1,1",
    "MacBook2,1",
    "MacBook3,1",
    "MacBook4,1",
    "MacBook5,1",
    "MacBook5,2",
    "MacBookAir1,1",
    "MacBookAir2,1",
    "MacBookPro1,1",
    "MacBookPro1,2",
    "MacBookPro2,1",
    "MacBookPro2,2",
    "MacBookPro3,1",
    "MacBookPro4,1",
    "MacBookPro5,1",
    "MacBookPro5,2",
    "MacBookPro5,3",
    "MacBookPro5,4",
    "MacBookPro5,5",
    "MacPro1,1",
    "MacPro2,1",
    "MacPro3,1",
    "MacPro4,1",
    "Macmini1,1",
    "Macmini2,1",
    "Macmini3,1",
    "Xserve1,1",
    "Xserve2,1",
    "Xserve3,1",
    "iMac4,1",
    "iMac4,2",
    "iMac5,1",
    "iMac5,2",
    "iMac6,1",
    "iMac7,1",
    "iMac8,1",
    "iMac9,1",
];

/// Case-sensitive exact membership test over a sorted table.
pub(crate) fn table_contains(table: &[&str], value: &str) -> bool {
    table.binary_search(&value).is_ok()
}
