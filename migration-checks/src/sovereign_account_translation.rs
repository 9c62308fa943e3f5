// Copyright (C) Parity Technologies (UK) Ltd.
// This file is part of Polkadot.

// Polkadot is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// Polkadot is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with Polkadot.  If not, see <http://www.gnu.org/licenses/>.

//! Static Relay Chain to Asset Hub account correspondences.
//!
//! Not sorted: [`crate::account_translation::TranslationTables`] sorts them on construction.

use hex_literal::hex;

/// Parachain sovereign accounts: `(para_id, rc_account, ah_account)`.
///
/// The Relay Chain `para` account of a parachain becomes its `sibl` account on Asset Hub.
pub const SOV_TRANSLATIONS: &[(u32, [u8; 32], [u8; 32])] = &[
	(
		0,
		hex!("7061726100000000000000000000000000000000000000000000000000000000"),
		hex!("7369626c00000000000000000000000000000000000000000000000000000000"),
	),
	(
		666,
		hex!("706172619a020000000000000000000000000000000000000000000000000000"),
		hex!("7369626c9a020000000000000000000000000000000000000000000000000000"),
	),
	(
		1000,
		hex!("70617261e8030000000000000000000000000000000000000000000000000000"),
		hex!("7369626ce8030000000000000000000000000000000000000000000000000000"),
	),
	(
		1001,
		hex!("70617261e9030000000000000000000000000000000000000000000000000000"),
		hex!("7369626ce9030000000000000000000000000000000000000000000000000000"),
	),
	(
		1002,
		hex!("70617261ea030000000000000000000000000000000000000000000000000000"),
		hex!("7369626cea030000000000000000000000000000000000000000000000000000"),
	),
	(
		2000,
		hex!("70617261d0070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cd0070000000000000000000000000000000000000000000000000000"),
	),
	(
		2001,
		hex!("70617261d1070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cd1070000000000000000000000000000000000000000000000000000"),
	),
	(
		2002,
		hex!("70617261d2070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cd2070000000000000000000000000000000000000000000000000000"),
	),
	(
		2004,
		hex!("70617261d4070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cd4070000000000000000000000000000000000000000000000000000"),
	),
	(
		2006,
		hex!("70617261d6070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cd6070000000000000000000000000000000000000000000000000000"),
	),
	(
		2007,
		hex!("70617261d7070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cd7070000000000000000000000000000000000000000000000000000"),
	),
	(
		2008,
		hex!("70617261d8070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cd8070000000000000000000000000000000000000000000000000000"),
	),
	(
		2011,
		hex!("70617261db070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cdb070000000000000000000000000000000000000000000000000000"),
	),
	(
		2012,
		hex!("70617261dc070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cdc070000000000000000000000000000000000000000000000000000"),
	),
	(
		2013,
		hex!("70617261dd070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cdd070000000000000000000000000000000000000000000000000000"),
	),
	(
		2019,
		hex!("70617261e3070000000000000000000000000000000000000000000000000000"),
		hex!("7369626ce3070000000000000000000000000000000000000000000000000000"),
	),
	(
		2021,
		hex!("70617261e5070000000000000000000000000000000000000000000000000000"),
		hex!("7369626ce5070000000000000000000000000000000000000000000000000000"),
	),
	(
		2025,
		hex!("70617261e9070000000000000000000000000000000000000000000000000000"),
		hex!("7369626ce9070000000000000000000000000000000000000000000000000000"),
	),
	(
		2026,
		hex!("70617261ea070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cea070000000000000000000000000000000000000000000000000000"),
	),
	(
		2030,
		hex!("70617261ee070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cee070000000000000000000000000000000000000000000000000000"),
	),
	(
		2031,
		hex!("70617261ef070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cef070000000000000000000000000000000000000000000000000000"),
	),
	(
		2032,
		hex!("70617261f0070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cf0070000000000000000000000000000000000000000000000000000"),
	),
	(
		2034,
		hex!("70617261f2070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cf2070000000000000000000000000000000000000000000000000000"),
	),
	(
		2035,
		hex!("70617261f3070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cf3070000000000000000000000000000000000000000000000000000"),
	),
	(
		2037,
		hex!("70617261f5070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cf5070000000000000000000000000000000000000000000000000000"),
	),
	(
		2039,
		hex!("70617261f7070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cf7070000000000000000000000000000000000000000000000000000"),
	),
	(
		2040,
		hex!("70617261f8070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cf8070000000000000000000000000000000000000000000000000000"),
	),
	(
		2043,
		hex!("70617261fb070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cfb070000000000000000000000000000000000000000000000000000"),
	),
	(
		2046,
		hex!("70617261fe070000000000000000000000000000000000000000000000000000"),
		hex!("7369626cfe070000000000000000000000000000000000000000000000000000"),
	),
	(
		2048,
		hex!("7061726100080000000000000000000000000000000000000000000000000000"),
		hex!("7369626c00080000000000000000000000000000000000000000000000000000"),
	),
	(
		2050,
		hex!("7061726102080000000000000000000000000000000000000000000000000000"),
		hex!("7369626c02080000000000000000000000000000000000000000000000000000"),
	),
	(
		2051,
		hex!("7061726103080000000000000000000000000000000000000000000000000000"),
		hex!("7369626c03080000000000000000000000000000000000000000000000000000"),
	),
	(
		2086,
		hex!("7061726126080000000000000000000000000000000000000000000000000000"),
		hex!("7369626c26080000000000000000000000000000000000000000000000000000"),
	),
	(
		2087,
		hex!("7061726127080000000000000000000000000000000000000000000000000000"),
		hex!("7369626c27080000000000000000000000000000000000000000000000000000"),
	),
	(
		2091,
		hex!("706172612b080000000000000000000000000000000000000000000000000000"),
		hex!("7369626c2b080000000000000000000000000000000000000000000000000000"),
	),
	(
		2092,
		hex!("706172612c080000000000000000000000000000000000000000000000000000"),
		hex!("7369626c2c080000000000000000000000000000000000000000000000000000"),
	),
	(
		2094,
		hex!("706172612e080000000000000000000000000000000000000000000000000000"),
		hex!("7369626c2e080000000000000000000000000000000000000000000000000000"),
	),
	(
		2101,
		hex!("7061726135080000000000000000000000000000000000000000000000000000"),
		hex!("7369626c35080000000000000000000000000000000000000000000000000000"),
	),
	(
		2104,
		hex!("7061726138080000000000000000000000000000000000000000000000000000"),
		hex!("7369626c38080000000000000000000000000000000000000000000000000000"),
	),
	(
		3334,
		hex!("70617261060d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c060d0000000000000000000000000000000000000000000000000000"),
	),
	(
		3336,
		hex!("70617261080d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c080d0000000000000000000000000000000000000000000000000000"),
	),
	(
		3338,
		hex!("706172610a0d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c0a0d0000000000000000000000000000000000000000000000000000"),
	),
	(
		3340,
		hex!("706172610c0d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c0c0d0000000000000000000000000000000000000000000000000000"),
	),
	(
		3344,
		hex!("70617261100d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c100d0000000000000000000000000000000000000000000000000000"),
	),
	(
		3345,
		hex!("70617261110d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c110d0000000000000000000000000000000000000000000000000000"),
	),
	(
		3367,
		hex!("70617261270d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c270d0000000000000000000000000000000000000000000000000000"),
	),
	(
		3369,
		hex!("70617261290d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c290d0000000000000000000000000000000000000000000000000000"),
	),
	(
		3370,
		hex!("706172612a0d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c2a0d0000000000000000000000000000000000000000000000000000"),
	),
	(
		3388,
		hex!("706172613c0d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c3c0d0000000000000000000000000000000000000000000000000000"),
	),
	(
		3397,
		hex!("70617261450d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c450d0000000000000000000000000000000000000000000000000000"),
	),
	(
		3415,
		hex!("70617261570d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c570d0000000000000000000000000000000000000000000000000000"),
	),
	(
		3417,
		hex!("70617261590d0000000000000000000000000000000000000000000000000000"),
		hex!("7369626c590d0000000000000000000000000000000000000000000000000000"),
	),
	(
		4009,
		hex!("70617261a90f0000000000000000000000000000000000000000000000000000"),
		hex!("7369626ca90f0000000000000000000000000000000000000000000000000000"),
	),
];

/// Accounts derived from parachain sovereign accounts through `utility.asDerivative`:
/// `(para_id, derivation_index, rc_account, ah_account)`.
pub const DERIVED_TRANSLATIONS: &[(u32, u16, [u8; 32], [u8; 32])] = &[
	(
		2000,
		0,
		hex!("d7b8926b326dd349355a9a7cca6606c1e0eb6fd2b506066b518c7155ff0d8297"),
		hex!("50ca9b6bf6c83ca2a918b9861788d6facd26e5fd78a07f9848070697683745b3"),
	),
	(
		2001,
		0,
		hex!("5a53736d8e96f1c007cf0d630acf5209b20611617af23ce924c8e25328eb5d28"),
		hex!("290bf94235666a351d9c8082c77e689813a905d0bbffdbd8b4a619ec5303ba27"),
	),
	(
		2001,
		1,
		hex!("f1c5ca0368e7a567945a59aaea92b9be1e0794fe5e077d017462b7ce8fc1ed7c"),
		hex!("c94f02677ffb78dc23fbd3b95beb2650fe4fa5c466e5aedee74e89d96351800c"),
	),
	(
		2001,
		2,
		hex!("1e365411cfd0b0f78466be433a2ec5f7d545c5e28cb2e9a31ce97d4a28447dfc"),
		hex!("a5604357a36f5cbfa6926f05f5c6397a901c373ed1c7249d348c5d13d059b1c6"),
	),
	(
		2001,
		3,
		hex!("234744488721d7ff43126a4784abe296de003c08fec5acece4af661eb97b78ed"),
		hex!("92b0105f2681981d7691b31b3569125b9ae0cd0adebb6b37d804788fbbebf5c6"),
	),
	(
		2001,
		4,
		hex!("30b32c5f11bc7c29f1e5b24680eab529f7a7b44c6be698f11bc009f4001035b1"),
		hex!("8044838bb093ef30cdae6923760b9f9f92a0817f3812acfb27b26a831acd3848"),
	),
	(
		2012,
		0,
		hex!("f82777e46281c5f5000af5dbb01fa41cdf0ff53ac4167b7297e386d834ff7c0e"),
		hex!("2e007ed75739bb293788b83c94dee3247d1561337b69f593cc044cf11606f573"),
	),
	(
		2012,
		1,
		hex!("aa006b3de1565c48ade1c1f3b646090be49389327f6b214076e5d2bd2ba0fb02"),
		hex!("26b0b1d07bded0e85c829f664ff9440b3ad0d8855fc7634d547e99ecd70d78cf"),
	),
	(
		2012,
		2,
		hex!("06926c6bab20739b8d4710e56a9ce6db7b0f67986a4f29664919620653f3a435"),
		hex!("d06990044418b18883108cf323580cc769414ddbee42bcebaf72331c175a9d90"),
	),
	(
		2012,
		3,
		hex!("fe5326ff816ac945120d53cffdd00919268032f0e478d40c23dea72a69e53660"),
		hex!("ceca601fde11eed1f4c6fe4f0a2ba581b75c1011a94d0426226c79e9f23ca956"),
	),
	(
		2012,
		4,
		hex!("f60aa184555b35cfcd6dc246424240068da18dd1bfeefccf8d5a26713b9917f7"),
		hex!("0891c74febe45a39b18715a5c4a0f9592203f53efee5c75e648a0388974b2ca7"),
	),
	(
		2012,
		5,
		hex!("1bba940dce8f85a0088315d47c39f4318a107cff37333206e40f227c90a3f6a0"),
		hex!("0f8f1e28d43adea08631b882277dc53916d872d08ae2410d3721355618ababfe"),
	),
	(
		2019,
		0,
		hex!("5640ec97748f5b5da9a2298e830e8971df7908861e1710b957fe06f0703bca7d"),
		hex!("d9c2775f1255eaaf78a22fdebb5471ca6392c2441118caad3f15b58f52686800"),
	),
	(
		2030,
		0,
		hex!("adcea185416af2d3e8df8c1c8ee8a634bf1c3275b3820cb6d935300d42c73b2a"),
		hex!("69f880852768f2d00acfa7824533aa4378e48d1b9fbc6b44500e8b98debeaccd"),
	),
	(
		2030,
		1,
		hex!("96d16ffaae52a6a195b6d9f0b365677aedb77675f423813112c5ef5434523622"),
		hex!("39d0a3c793549eda79b5cd3f8ab1c5879326352eb6583696249e38684b9451c1"),
	),
	(
		2030,
		2,
		hex!("773d6cf20cfdcbb74194ec6afca483facb3751bfb8933163f2e184f2b1424fb1"),
		hex!("77c1303f053dc000bcacd591d0267f79ef5124a5b1a9207e8e1b29da9270e3a8"),
	),
	(
		3397,
		0,
		hex!("950431ba0298ec4f6f5522dec45b9663f82057705a5c3d92b1bed454b64d8fa5"),
		hex!("14ef48f42beb705327d66e011249d4a1bc9318a894ccf2a840c831081de7de0c"),
	),
];
