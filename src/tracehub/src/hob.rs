// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

//! Walker over a PI Hand-off Block list left by an earlier boot stage.

use r_efi::efi::Guid;
use scroll::Pread;
use td_shim_interface::td_uefi_pi::{
    hob::{self as hob_lib, align_to_next_hob_offset},
    pi::hob::{GuidExtension, Header, HOB_TYPE_END_OF_HOB_LIST, HOB_TYPE_GUID_EXTENSION},
};

use crate::resolver::DescriptorSource;

/// One GUID extension HOB inside a [`HobList`].
#[derive(Copy, Clone, Debug)]
pub struct HobEntry<'a> {
    offset: usize,
    data: &'a [u8],
}

impl<'a> HobEntry<'a> {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

/// The GUID extension HOBs carrying `guid`, in list order.
#[derive(Copy, Clone)]
pub struct HobList<'a> {
    hob: &'a [u8],
    guid: Guid,
}

impl<'a> HobList<'a> {
    /// `None` if the list has no HOB named `guid`.
    pub fn try_locate(hob: &'a [u8], guid: Guid) -> Option<Self> {
        let list = HobList { hob, guid };
        list.find_from(0)?;
        Some(list)
    }

    fn find_from(&self, mut offset: usize) -> Option<HobEntry<'a>> {
        while offset < self.hob.len() {
            let hob = &self.hob[offset..];
            let header: Header = hob.pread(0).ok()?;

            match header.r#type {
                HOB_TYPE_END_OF_HOB_LIST => return None,
                HOB_TYPE_GUID_EXTENSION => {
                    let guid_hob: GuidExtension = hob.pread(0).ok()?;
                    if &guid_hob.name == self.guid.as_bytes() {
                        let guid_hob = hob.get(..header.length as usize)?;
                        return Some(HobEntry {
                            offset,
                            data: hob_lib::get_guid_data(guid_hob)?,
                        });
                    }
                }
                _ => {}
            }

            offset = align_to_next_hob_offset(self.hob.len(), offset, header.length)?;
        }
        None
    }
}

impl<'a> DescriptorSource for HobList<'a> {
    type Entry = HobEntry<'a>;

    fn first_entry(&self) -> Option<HobEntry<'a>> {
        self.find_from(0)
    }

    fn next_entry(&self, entry: &HobEntry<'a>) -> Option<HobEntry<'a>> {
        let header: Header = self.hob.pread(entry.offset).ok()?;
        let next = align_to_next_hob_offset(self.hob.len(), entry.offset, header.length)?;
        self.find_from(next)
    }

    fn entry_data(&self, entry: &HobEntry<'a>) -> &[u8] {
        entry.data
    }
}
