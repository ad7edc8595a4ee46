use crate::ContractResult;
use concordium_cis2::Cis2Error;
use concordium_std::*;

/// Addresses allowed to run the privileged parts of a sale contract.
#[derive(Debug, Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct Authority<S: HasStateApi> {
    /// Trusted addresses that may mint the team reserve and manage both role lists.
    admins: StateSet<Address, S>,
    /// Addresses that may change phase, fees and quotas and manage the manager list.
    sale_managers: StateSet<Address, S>,
}

impl<S: HasStateApi> Authority<S> {
    pub fn new(state_builder: &mut StateBuilder<S>, admin: Address) -> Self {
        let mut admins = state_builder.new_set();
        admins.insert(admin);
        Self {
            admins,
            sale_managers: state_builder.new_set(),
        }
    }

    pub fn has_admin_rights(&self, address: &Address) -> bool {
        self.admins.contains(address)
    }

    /// Admins are implicitly sale managers.
    pub fn has_sale_manager_rights(&self, address: &Address) -> bool {
        self.sale_managers.contains(address) || self.has_admin_rights(address)
    }

    /// Adds or removes `update.address` from the requested role list.
    ///
    /// Adding an existing member or removing a missing one is a no-op.
    pub fn handle_update(
        &mut self,
        sender: Address,
        update: &AuthorityUpdateParams,
    ) -> ContractResult<()> {
        let members = match update.role {
            AuthorityRole::SaleManager => {
                ensure!(
                    self.has_sale_manager_rights(&sender),
                    Cis2Error::Unauthorized
                );
                &mut self.sale_managers
            }
            AuthorityRole::Admin => {
                ensure!(self.has_admin_rights(&sender), Cis2Error::Unauthorized);
                &mut self.admins
            }
        };

        match update.kind {
            AuthorityUpdateKind::Remove => {
                members.remove(&update.address);
            }
            AuthorityUpdateKind::Add => {
                members.insert(update.address);
            }
        }

        Ok(())
    }

    pub fn handle_view(&self, view: AuthorityViewParams) -> Vec<Address> {
        let members = match view.role {
            AuthorityRole::SaleManager => &self.sale_managers,
            AuthorityRole::Admin => &self.admins,
        };

        members
            .iter()
            .skip(view.skip as usize)
            .take(view.show as usize)
            .map(|a| *a)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, SchemaType, Serialize)]
pub enum AuthorityRole {
    SaleManager,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, SchemaType, Serialize)]
pub enum AuthorityUpdateKind {
    Remove,
    Add,
}

#[derive(Debug, Clone, PartialEq, Eq, SchemaType, Serialize)]
pub struct AuthorityUpdateParams {
    pub role: AuthorityRole,
    pub kind: AuthorityUpdateKind,
    pub address: Address,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityViewParams {
    pub role: AuthorityRole,
    pub skip: u32,
    pub show: u32,
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const ADMIN: Address = Address::Account(AccountAddress([1; 32]));
    const MANAGER: Address = Address::Account(AccountAddress([2; 32]));
    const MANAGER_CONTRACT: Address = Address::Contract(ContractAddress {
        index: 2,
        subindex: 0,
    });
    const USER: Address = Address::Account(AccountAddress([16; 32]));

    fn default_authority() -> Authority<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        let mut authority = Authority::new(&mut state_builder, ADMIN);
        authority.sale_managers.insert(MANAGER);
        authority.sale_managers.insert(MANAGER_CONTRACT);
        authority
    }

    fn update(
        role: AuthorityRole,
        kind: AuthorityUpdateKind,
        address: Address,
    ) -> AuthorityUpdateParams {
        AuthorityUpdateParams {
            role,
            kind,
            address,
        }
    }

    #[concordium_test]
    fn test_admin_is_sale_manager() {
        let authority = default_authority();

        claim!(authority.has_admin_rights(&ADMIN));
        claim!(authority.has_sale_manager_rights(&ADMIN));
        claim!(!authority.has_admin_rights(&MANAGER));
        claim!(authority.has_sale_manager_rights(&MANAGER_CONTRACT));
        claim!(!authority.has_sale_manager_rights(&USER));
    }

    #[concordium_test]
    fn test_admin_adds_admin() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            ADMIN,
            &update(AuthorityRole::Admin, AuthorityUpdateKind::Add, USER),
        );
        claim_eq!(result, Ok(()));
        claim!(authority.has_admin_rights(&USER));
    }

    #[concordium_test]
    fn test_manager_cannot_add_admin() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            MANAGER,
            &update(AuthorityRole::Admin, AuthorityUpdateKind::Add, USER),
        );
        claim_eq!(result, Err(Cis2Error::Unauthorized));
        claim!(!authority.has_admin_rights(&USER));
        claim!(!authority.has_sale_manager_rights(&USER));
    }

    #[concordium_test]
    fn test_manager_manages_managers() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            MANAGER,
            &update(AuthorityRole::SaleManager, AuthorityUpdateKind::Add, USER),
        );
        claim_eq!(result, Ok(()));
        claim!(authority.has_sale_manager_rights(&USER));
        claim!(!authority.has_admin_rights(&USER));

        let result = authority.handle_update(
            MANAGER_CONTRACT,
            &update(AuthorityRole::SaleManager, AuthorityUpdateKind::Remove, MANAGER),
        );
        claim_eq!(result, Ok(()));
        claim!(!authority.has_sale_manager_rights(&MANAGER));
    }

    #[concordium_test]
    fn test_user_cannot_add_manager() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            USER,
            &update(AuthorityRole::SaleManager, AuthorityUpdateKind::Add, USER),
        );
        claim_eq!(result, Err(Cis2Error::Unauthorized));
        claim!(!authority.has_sale_manager_rights(&USER));
    }

    #[concordium_test]
    fn test_remove_missing_admin() {
        let mut authority = default_authority();

        // No change or error expected
        let result = authority.handle_update(
            ADMIN,
            &update(AuthorityRole::Admin, AuthorityUpdateKind::Remove, USER),
        );
        claim_eq!(result, Ok(()));
        claim!(authority.has_admin_rights(&ADMIN));
    }

    #[concordium_test]
    fn test_view_sale_managers_paged() {
        let mut authority = default_authority();

        let mut expected = (16u8..=80u8)
            .map(|n| Address::Account(AccountAddress([n; 32])))
            .chain([MANAGER, MANAGER_CONTRACT])
            .collect::<HashSet<_>>();

        for manager in expected.iter() {
            authority.sale_managers.insert(*manager);
        }

        let mut num_seen = 0;
        let increment = 10;
        loop {
            let page = authority.handle_view(AuthorityViewParams {
                role: AuthorityRole::SaleManager,
                skip: num_seen,
                show: increment,
            });

            for addr in page.iter() {
                claim!(expected.remove(addr));
            }

            if page.len() != increment as usize {
                break;
            }
            num_seen += increment;
        }

        claim!(expected.is_empty());
    }
}
